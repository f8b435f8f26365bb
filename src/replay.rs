//! Move application and game replay. The applicator is the only place
//! board mutation happens; the replayer walks a transcript's move pairs
//! in order and feeds each token through classification and application.

use crate::{
    board::Board,
    constants::{
        KING_START_FILE, KINGSIDE_KING_FILE, KINGSIDE_ROOK_FROM_FILE, KINGSIDE_ROOK_TO_FILE,
        QUEENSIDE_KING_FILE, QUEENSIDE_ROOK_FROM_FILE, QUEENSIDE_ROOK_TO_FILE,
    },
    locate::locate_source,
    san::{self, SanError},
    types::{CastleSide, GameOutcome, MovePair, Piece, PieceKind, PieceMove, SanMove, Side, Square},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("malformed move `{token}` for {side}: {source}")]
    Malformed {
        token: String,
        side: Side,
        #[source]
        source: SanError,
    },
    #[error("no {kind} for {side} can reach {destination} in `{token}`")]
    NoSource {
        token: String,
        side: Side,
        kind: PieceKind,
        destination: Square,
    },
    #[error("capture flag of `{token}` for {side} does not match the occupancy of {destination}")]
    CaptureMismatch {
        token: String,
        side: Side,
        destination: Square,
    },
}

/// Applies one classified move for `side`. Result markers are a no-op;
/// the replayer interprets them. `token` is carried only for error
/// reporting.
pub fn apply(
    board: &mut Board,
    side: Side,
    mv: &SanMove,
    token: &str,
) -> Result<(), ReplayError> {
    match mv {
        SanMove::Result(_) => Ok(()),
        SanMove::Castle(castle) => {
            apply_castle(board, side, *castle);
            Ok(())
        }
        SanMove::Piece(mv) => apply_piece_move(board, side, mv, token),
    }
}

fn apply_piece_move(
    board: &mut Board,
    side: Side,
    mv: &PieceMove,
    token: &str,
) -> Result<(), ReplayError> {
    let source = locate_source(board, side, mv).ok_or_else(|| ReplayError::NoSource {
        token: token.to_string(),
        side,
        kind: mv.kind,
        destination: mv.destination,
    })?;

    let capture_mismatch = || ReplayError::CaptureMismatch {
        token: token.to_string(),
        side,
        destination: mv.destination,
    };

    match (mv.is_capture, board.piece_at(mv.destination)) {
        (true, Some(target)) if target.side != side => {}
        (true, None) if mv.kind == PieceKind::Pawn => {
            // A pawn capture onto an empty square is en passant; the
            // bypassed pawn sits beside the destination, on the source
            // rank.
            let bypassed = Square::new(source.rank(), mv.destination.file());

            if board.piece_at(bypassed) != Some(Piece::new(PieceKind::Pawn, side.opponent())) {
                return Err(capture_mismatch());
            }

            board.clear_square(bypassed);
        }
        (false, None) => {}
        _ => return Err(capture_mismatch()),
    }

    board.clear_square(source);
    board.set_piece(
        mv.destination,
        Piece::new(mv.promotion.unwrap_or(mv.kind), side),
    );

    Ok(())
}

/// Castling is a fixed geometric rewrite on the side's back rank; the
/// king tracker is refreshed by placing the king.
fn apply_castle(board: &mut Board, side: Side, castle: CastleSide) {
    let rank = side.back_rank();

    let (king_file, rook_from, rook_to) = match castle {
        CastleSide::Kingside => (
            KINGSIDE_KING_FILE,
            KINGSIDE_ROOK_FROM_FILE,
            KINGSIDE_ROOK_TO_FILE,
        ),
        CastleSide::Queenside => (
            QUEENSIDE_KING_FILE,
            QUEENSIDE_ROOK_FROM_FILE,
            QUEENSIDE_ROOK_TO_FILE,
        ),
    };

    board.clear_square(Square::new(rank, KING_START_FILE));
    board.clear_square(Square::new(rank, rook_from));
    board.set_piece(
        Square::new(rank, king_file),
        Piece::new(PieceKind::King, side),
    );
    board.set_piece(
        Square::new(rank, rook_to),
        Piece::new(PieceKind::Rook, side),
    );
}

/// Replays one game. Owns the board exclusively for the duration; moves
/// are strictly ordered, so there is no valid parallel schedule within a
/// game.
#[derive(Clone, Debug)]
pub struct Replayer {
    board: Board,
    halfmoves: usize,
    outcome: Option<GameOutcome>,
}

impl Replayer {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            halfmoves: 0,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Half-moves applied so far (result markers do not count).
    pub fn halfmoves(&self) -> usize {
        self.halfmoves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Classifies and applies one token. Tokens arriving after a result
    /// marker are ignored rather than rejected.
    pub fn play_token(&mut self, side: Side, token: &str) -> Result<(), ReplayError> {
        if self.finished() {
            return Ok(());
        }

        let mv = san::classify(token).map_err(|source| ReplayError::Malformed {
            token: token.to_string(),
            side,
            source,
        })?;

        if let SanMove::Result(outcome) = &mv {
            self.outcome = Some(*outcome);
            return Ok(());
        }

        apply(&mut self.board, side, &mv, token)?;
        self.halfmoves += 1;

        Ok(())
    }

    pub fn play_pair(&mut self, pair: &MovePair) -> Result<(), ReplayError> {
        for (side, token) in pair.tokens() {
            self.play_token(side, token)?;
        }

        Ok(())
    }
}

impl Default for Replayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays a whole transcript and returns the final board.
pub fn replay(pairs: &[MovePair]) -> Result<Board, ReplayError> {
    let mut replayer = Replayer::new();

    for pair in pairs {
        replayer.play_pair(pair)?;
    }

    Ok(replayer.into_board())
}

/// Replays a whole transcript and returns an independent board copy after
/// every applied half-move.
pub fn replay_with_snapshots(pairs: &[MovePair]) -> Result<Vec<Board>, ReplayError> {
    let mut replayer = Replayer::new();
    let mut snapshots = Vec::new();

    for pair in pairs {
        for (side, token) in pair.tokens() {
            let before = replayer.halfmoves();
            replayer.play_token(side, token)?;

            if replayer.halfmoves() > before {
                snapshots.push(replayer.board().clone());
            }
        }
    }

    Ok(snapshots)
}
