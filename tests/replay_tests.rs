
use pgn_replay::{
    board::Board,
    replay::{self, ReplayError, Replayer, apply},
    san::classify,
    types::{GameOutcome, MovePair, PieceKind, Side},
};
use test_utils::*;

fn pairs(movetext: &str) -> Vec<MovePair> {
    pgn_replay::pgn::parse_movetext(movetext)
}

#[test]
fn empty_transcript_leaves_the_initial_board_unchanged() {
    let board = replay::replay(&[]).unwrap();

    assert_eq!(board, Board::new());
}

#[test]
fn pawn_double_step_moves_from_the_home_rank() {
    let board = replay::replay(&pairs("1. e4")).unwrap();

    assert_eq!(
        board.piece_at(sq("e4")),
        Some(piece(PieceKind::Pawn, Side::White))
    );
    assert_eq!(board.piece_at(sq("e2")), None);
    assert_eq!(board.piece_at(sq("e3")), None);
}

#[test]
fn capture_clears_the_source_and_overwrites_the_destination() {
    let board = replay::replay(&pairs("1. e4 d5 2. exd5")).unwrap();

    assert_eq!(
        board.piece_at(sq("d5")),
        Some(piece(PieceKind::Pawn, Side::White))
    );
    assert_eq!(board.piece_at(sq("e4")), None);
    assert_eq!(board.piece_at(sq("e5")), None);
}

#[test]
fn kingside_castle_rewrites_the_back_rank() {
    let mut board = Board::new();
    board.clear_square(sq("f1"));
    board.clear_square(sq("g1"));

    let mv = classify("O-O").unwrap();
    apply(&mut board, Side::White, &mv, "O-O").unwrap();

    assert_eq!(
        board.piece_at(sq("g1")),
        Some(piece(PieceKind::King, Side::White))
    );
    assert_eq!(
        board.piece_at(sq("f1")),
        Some(piece(PieceKind::Rook, Side::White))
    );
    assert_eq!(board.piece_at(sq("e1")), None);
    assert_eq!(board.piece_at(sq("h1")), None);
    assert_eq!(board.king(Side::White), sq("g1"));
}

#[test]
fn queenside_castle_rewrites_the_back_rank() {
    let mut board = Board::new();
    for square in ["b8", "c8", "d8"] {
        board.clear_square(sq(square));
    }

    let mv = classify("O-O-O").unwrap();
    apply(&mut board, Side::Black, &mv, "O-O-O").unwrap();

    assert_eq!(
        board.piece_at(sq("c8")),
        Some(piece(PieceKind::King, Side::Black))
    );
    assert_eq!(
        board.piece_at(sq("d8")),
        Some(piece(PieceKind::Rook, Side::Black))
    );
    assert_eq!(board.piece_at(sq("e8")), None);
    assert_eq!(board.piece_at(sq("a8")), None);
}

#[test]
fn rook_disambiguation_selects_the_hinted_rook() {
    let board = board_with(&[
        ("a1", PieceKind::Rook, Side::White),
        ("h1", PieceKind::Rook, Side::White),
    ]);

    let mut hinted = board.clone();
    let mv = classify("Rad1").unwrap();
    apply(&mut hinted, Side::White, &mv, "Rad1").unwrap();

    assert_eq!(hinted.piece_at(sq("a1")), None);
    assert_eq!(
        hinted.piece_at(sq("h1")),
        Some(piece(PieceKind::Rook, Side::White))
    );
    assert_eq!(
        hinted.piece_at(sq("d1")),
        Some(piece(PieceKind::Rook, Side::White))
    );

    let mut hinted = board;
    let mv = classify("Rhd1").unwrap();
    apply(&mut hinted, Side::White, &mv, "Rhd1").unwrap();

    assert_eq!(hinted.piece_at(sq("h1")), None);
    assert_eq!(
        hinted.piece_at(sq("a1")),
        Some(piece(PieceKind::Rook, Side::White))
    );
}

#[test]
fn malformed_token_surfaces_a_classification_error() {
    let err = replay::replay(&pairs("1. Z9")).unwrap_err();

    assert!(matches!(
        err,
        ReplayError::Malformed { ref token, side: Side::White, .. } if token == "Z9"
    ));
}

#[test]
fn unresolvable_move_reports_piece_and_destination() {
    let err = replay::replay(&pairs("1. Nd4")).unwrap_err();

    match err {
        ReplayError::NoSource {
            kind, destination, ..
        } => {
            assert_eq!(kind, PieceKind::Knight);
            assert_eq!(destination, sq("d4"));
        }
        other => panic!("expected NoSource, got {other:?}"),
    }
}

#[test]
fn reapplying_a_descriptor_is_not_idempotent() {
    // Applying the same descriptor twice is expected to fail or change
    // the board again; it must never be a silent no-op.
    let mut board = Board::new();
    let mv = classify("e4").unwrap();

    apply(&mut board, Side::White, &mv, "e4").unwrap();
    let after_first = board.clone();

    let second = apply(&mut board, Side::White, &mv, "e4");

    assert!(second.is_err());
    assert_eq!(board, after_first);
}

#[test]
fn single_pawn_endgame_matches_reference_positions() {
    // Kings and one pawn only: every move is unambiguous, so the final
    // grid can be written down by hand.
    let mut board = board_with(&[("e2", PieceKind::Pawn, Side::White)]);

    for (side, token) in [
        (Side::White, "e4"),
        (Side::Black, "Kd7"),
        (Side::White, "e5"),
        (Side::Black, "Kd8"),
    ] {
        let mv = classify(token).unwrap();
        apply(&mut board, side, &mv, token).unwrap();
    }

    let mut expected = board_with(&[("e5", PieceKind::Pawn, Side::White)]);
    expected.clear_square(sq("e8"));
    expected.set_piece(sq("d8"), piece(PieceKind::King, Side::Black));

    assert_eq!(board, expected);
}

#[test]
fn scholars_mate_reaches_the_known_final_position() {
    let mut replayer = Replayer::new();

    for pair in pairs("1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0") {
        replayer.play_pair(&pair).unwrap();
    }

    assert_eq!(replayer.halfmoves(), 7);
    assert_eq!(replayer.outcome(), Some(GameOutcome::WhiteWin));

    let board = replayer.board();
    assert_eq!(
        board.piece_at(sq("f7")),
        Some(piece(PieceKind::Queen, Side::White))
    );
    assert_eq!(
        board.piece_at(sq("c4")),
        Some(piece(PieceKind::Bishop, Side::White))
    );
    assert_eq!(
        board.piece_at(sq("f6")),
        Some(piece(PieceKind::Knight, Side::Black))
    );
    assert_eq!(board.piece_at(sq("h5")), None);
    assert_eq!(board.piece_at(sq("d1")), None);
    assert_eq!(
        board.piece_at(sq("e8")),
        Some(piece(PieceKind::King, Side::Black))
    );
}

#[test]
fn snapshots_are_independent_copies() {
    let snapshots = replay::replay_with_snapshots(&pairs("1. e4 e5 2. Nf3")).unwrap();

    assert_eq!(snapshots.len(), 3);
    assert_ne!(snapshots[0], snapshots[1]);
    assert_ne!(snapshots[1], snapshots[2]);

    // The first snapshot still shows Black's untouched e7 pawn.
    assert_eq!(
        snapshots[0].piece_at(sq("e7")),
        Some(piece(PieceKind::Pawn, Side::Black))
    );
    assert_eq!(snapshots[0].piece_at(sq("e5")), None);
}

#[test]
fn result_marker_short_circuits_the_game() {
    let board = replay::replay(&pairs("1. e4 e5 1/2-1/2")).unwrap();

    // The result token lands where Black's reply to move 2 would be and
    // stops processing without touching the board.
    assert_eq!(
        board.piece_at(sq("e4")),
        Some(piece(PieceKind::Pawn, Side::White))
    );
    assert_eq!(
        board.piece_at(sq("e5")),
        Some(piece(PieceKind::Pawn, Side::Black))
    );
}
