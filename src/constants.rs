use crate::types::PieceKind;

pub const NUM_RANKS: usize = 8;
pub const NUM_FILES: usize = 8;
pub const NUM_SIDES: usize = 2;

/// Back-rank layout shared by both sides (rank 0 for Black, rank 7 for
/// White).
pub const BACK_RANK: [PieceKind; NUM_FILES] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[rustfmt::skip]
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (1, -2), (-1, 2), (-1, -2),
    (2, 1), (2, -1), (-2, 1), (-2, -1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A queen's rays are the union of the rook and bishop rays.
#[rustfmt::skip]
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

// Castling geometry, by file (the rank is the side's back rank).
pub const KING_START_FILE: u8 = 4;
pub const KINGSIDE_KING_FILE: u8 = 6;
pub const KINGSIDE_ROOK_FROM_FILE: u8 = 7;
pub const KINGSIDE_ROOK_TO_FILE: u8 = 5;
pub const QUEENSIDE_KING_FILE: u8 = 2;
pub const QUEENSIDE_ROOK_FROM_FILE: u8 = 0;
pub const QUEENSIDE_ROOK_TO_FILE: u8 = 3;
