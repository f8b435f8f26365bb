use crate::{
    constants::{BACK_RANK, KING_START_FILE, NUM_FILES, NUM_RANKS, NUM_SIDES},
    types::{Piece, PieceKind, Side, Square},
};
use std::fmt;

/// The 8x8 occupancy grid plus a per-side tracker for the king's square.
/// The tracker is kept in sync by `set_piece`; it is meaningful whenever
/// that side's king is on the board (kings are unique and never captured
/// in well-formed input).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; NUM_FILES]; NUM_RANKS],
    kings: [Square; NUM_SIDES],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();

        for file in 0..NUM_FILES as u8 {
            let kind = BACK_RANK[file as usize];

            board.set_piece(Square::new(0, file), Piece::new(kind, Side::Black));
            board.set_piece(
                Square::new(1, file),
                Piece::new(PieceKind::Pawn, Side::Black),
            );
            board.set_piece(
                Square::new(6, file),
                Piece::new(PieceKind::Pawn, Side::White),
            );
            board.set_piece(Square::new(7, file), Piece::new(kind, Side::White));
        }

        board
    }

    /// An empty grid. The king trackers point at the e-file home squares
    /// until kings are actually placed.
    pub fn empty() -> Self {
        Self {
            grid: [[None; NUM_FILES]; NUM_RANKS],
            kings: [
                Square::new(Side::White.back_rank(), KING_START_FILE),
                Square::new(Side::Black.back_rank(), KING_START_FILE),
            ],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[square.rank() as usize][square.file() as usize] = Some(piece);

        if piece.kind == PieceKind::King {
            self.kings[piece.side as usize] = square;
        }
    }

    pub fn clear_square(&mut self, square: Square) {
        self.grid[square.rank() as usize][square.file() as usize] = None;
    }

    pub fn king(&self, side: Side) -> Square {
        self.kings[side as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in 0..NUM_RANKS {
            write!(f, "{} ", 8 - rank)?;

            for file in 0..NUM_FILES {
                match self.grid[rank][file] {
                    Some(piece) => write!(f, " {}", piece.code())?,
                    None => write!(f, " --")?,
                }
            }

            writeln!(f)?;
        }

        write!(f, "   a  b  c  d  e  f  g  h")
    }
}
