pub mod api;
pub mod board;
pub mod constants;
pub mod locate;
pub mod pgn;
pub mod piece;
pub mod replay;
pub mod san;
pub mod square;
pub mod types;
