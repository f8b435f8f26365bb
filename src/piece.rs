use crate::types::{GameOutcome, Piece, PieceKind, Side};
use std::fmt;

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The rank holding this side's back-rank pieces at the start of the
    /// game (and the rank castling happens on).
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Rank step from a pawn's destination back toward its source. White
    /// pawns advance toward rank 0, so their source lies one rank below
    /// (+1); Black pawns the opposite.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl PieceKind {
    /// The SAN letter prefix, if any. Pawn moves carry no letter.
    pub fn from_san_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

impl fmt::Display for GameOutcome {
    /// The PGN result literal this outcome was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::WhiteWin => write!(f, "1-0"),
            GameOutcome::BlackWin => write!(f, "0-1"),
            GameOutcome::Draw => write!(f, "1/2-1/2"),
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Two-character cell code, e.g. "wP" or "bK".
    pub fn code(self) -> String {
        let color = match self.side {
            Side::White => 'w',
            Side::Black => 'b',
        };

        format!("{}{}", color, self.kind.letter())
    }
}
