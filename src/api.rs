#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{NUM_FILES, NUM_RANKS};
use crate::pgn;
use crate::replay::Replayer;
use crate::types::Square;

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ReplayRequest {
    pub pgn: String,
    /// When set, the response carries a board copy after every half-move.
    pub snapshots: bool,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ReplayResponse {
    pub final_board: Vec<Vec<String>>, // Cell codes, "wP"/"bK"/"" per square
    pub halfmoves_played: usize,
    pub outcome: Option<String>, // "1-0", "0-1", or "1/2-1/2"
    pub snapshots: Option<Vec<Vec<Vec<String>>>>,
}

/// Main entry point for API consumers: tokenizes the PGN text and replays
/// it from the standard starting position.
pub fn replay_game(request: ReplayRequest) -> Result<ReplayResponse, String> {
    let pairs = pgn::parse_movetext(&request.pgn);

    let mut replayer = Replayer::new();
    let mut snapshots = request.snapshots.then(Vec::new);

    for pair in &pairs {
        for (side, token) in pair.tokens() {
            let before = replayer.halfmoves();

            replayer
                .play_token(side, token)
                .map_err(|e| e.to_string())?;

            if let Some(snapshots) = snapshots.as_mut() {
                if replayer.halfmoves() > before {
                    snapshots.push(board_cells(replayer.board()));
                }
            }
        }
    }

    Ok(ReplayResponse {
        final_board: board_cells(replayer.board()),
        halfmoves_played: replayer.halfmoves(),
        outcome: replayer.outcome().map(|outcome| outcome.to_string()),
        snapshots,
    })
}

/// JSON boundary for embedding callers.
#[cfg(feature = "api")]
pub fn replay_game_json(request_json: &str) -> Result<String, String> {
    let request: ReplayRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request: {e}"))?;

    let response = replay_game(request)?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to encode response: {e}"))
}

fn board_cells(board: &Board) -> Vec<Vec<String>> {
    (0..NUM_RANKS as u8)
        .map(|rank| {
            (0..NUM_FILES as u8)
                .map(|file| {
                    board
                        .piece_at(Square::new(rank, file))
                        .map(|piece| piece.code())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}
