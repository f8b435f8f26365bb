use crate::types::Square;
use std::fmt;

impl Square {
    /// Builds a square from SAN destination characters, e.g. ('e', '4').
    /// Rank digits count from White's side, so '8' maps to rank 0.
    pub fn from_san(file_ch: char, rank_ch: char) -> Option<Self> {
        if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return None;
        }

        let file = file_ch as u8 - b'a';
        let rank = 7 - (rank_ch as u8 - b'1');

        Some(Square::new(rank, file))
    }

    /// The square one step away, or `None` at the board edge.
    pub fn offset(self, rank_step: i8, file_step: i8) -> Option<Self> {
        let rank = self.rank() as i8 + rank_step;
        let file = self.file() as i8 + file_step;

        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as u8, file as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    /// Algebraic form, e.g. "e4".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'8' - self.rank()) as char
        )
    }
}
