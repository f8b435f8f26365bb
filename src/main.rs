use anyhow::{Context, Result, bail};
use pgn_replay::pgn;
use pgn_replay::replay::Replayer;

fn main() -> Result<()> {
    let mut path = None;
    let mut snapshots = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--snapshots" => snapshots = true,
            _ if path.is_none() => path = Some(arg),
            other => bail!("unexpected argument `{other}`"),
        }
    }

    let Some(path) = path else {
        bail!("usage: pgn-replay [--snapshots] <game.pgn>");
    };

    let pairs = pgn::load_game(&path).with_context(|| format!("could not load `{path}`"))?;

    let mut replayer = Replayer::new();
    println!("Starting position:\n{}", replayer.board());

    for pair in &pairs {
        for (side, token) in pair.tokens() {
            let before = replayer.halfmoves();

            replayer
                .play_token(side, token)
                .with_context(|| format!("replay stopped after {} half-moves", before))?;

            if snapshots && replayer.halfmoves() > before {
                println!("\n{side} plays {token}:\n{}", replayer.board());
            }
        }
    }

    println!(
        "\nFinal position after {} half-moves:\n{}",
        replayer.halfmoves(),
        replayer.board()
    );

    if let Some(outcome) = replayer.outcome() {
        println!("\nResult: {outcome}");
    }

    Ok(())
}
