#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    White = 0,
    Black = 1,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

/// A board coordinate. Rank 0 is Black's back rank (the "8" rank in
/// algebraic notation), rank 7 is White's.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Out-of-range coordinates are a programming error, not a runtime
    /// condition; callers validate before constructing.
    pub fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8, "square ({rank}, {file}) out of bounds");
        Self { rank, file }
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub const fn file(self) -> u8 {
        self.file
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
}

/// A classified piece-move token, e.g. `Nbd7` becomes
/// `{ kind: Knight, destination: d7, file_hint: Some(1), .. }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub kind: PieceKind,
    pub destination: Square,
    pub is_capture: bool,
    pub file_hint: Option<u8>,
    pub rank_hint: Option<u8>,
    pub promotion: Option<PieceKind>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SanMove {
    Piece(PieceMove),
    Castle(CastleSide),
    Result(GameOutcome),
}

/// One full move of notation: White's token and, unless the game ended
/// after White's move, Black's reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePair {
    pub white: String,
    pub black: Option<String>,
}

impl MovePair {
    pub fn tokens(&self) -> impl Iterator<Item = (Side, &str)> {
        std::iter::once((Side::White, self.white.as_str()))
            .chain(self.black.as_deref().map(|black| (Side::Black, black)))
            .filter(|(_, token)| !token.is_empty())
    }
}
