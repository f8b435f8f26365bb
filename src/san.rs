//! SAN token classification: one terse move string in, one structured
//! move descriptor out. No board access happens here; resolving which
//! piece moves is the locator's job.

use crate::types::{CastleSide, GameOutcome, PieceKind, PieceMove, SanMove, Square};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanError {
    #[error("token is too short to contain a destination square")]
    TooShort,
    #[error("`{0}` does not end in a valid destination square")]
    InvalidDestination(String),
    #[error("invalid promotion piece `{0}`")]
    InvalidPromotion(char),
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// Classifies one SAN token. The caller supplies a non-empty,
/// whitespace-free token; check and mate suffixes are accepted and
/// ignored (they carry no board-mutation meaning).
pub fn classify(token: &str) -> Result<SanMove, SanError> {
    let stripped = token
        .strip_suffix(['+', '#'])
        .unwrap_or(token);

    match stripped {
        "O-O" => return Ok(SanMove::Castle(CastleSide::Kingside)),
        "O-O-O" => return Ok(SanMove::Castle(CastleSide::Queenside)),
        "1-0" => return Ok(SanMove::Result(GameOutcome::WhiteWin)),
        "0-1" => return Ok(SanMove::Result(GameOutcome::BlackWin)),
        "1/2-1/2" => return Ok(SanMove::Result(GameOutcome::Draw)),
        _ => {}
    }

    let chars: Vec<char> = stripped.chars().collect();

    let (kind, body_start) = match chars.first().copied().and_then(PieceKind::from_san_letter) {
        Some(kind) => (kind, 1),
        None => (PieceKind::Pawn, 0),
    };

    // A trailing "=Q" style promotion marker is stripped before the
    // destination is read off the end.
    let mut body_end = chars.len();
    let mut promotion = None;

    if body_end >= 2 && chars[body_end - 2] == '=' {
        let letter = chars[body_end - 1];

        promotion = match PieceKind::from_san_letter(letter) {
            Some(PieceKind::King) | None => return Err(SanError::InvalidPromotion(letter)),
            some_kind => some_kind,
        };
        body_end -= 2;
    }

    if body_end < body_start + 2 {
        return Err(SanError::TooShort);
    }

    let destination = Square::from_san(chars[body_end - 2], chars[body_end - 1])
        .ok_or_else(|| SanError::InvalidDestination(token.to_string()))?;

    let mut is_capture = false;
    let mut file_hint = None;
    let mut rank_hint = None;

    for &ch in &chars[body_start..body_end - 2] {
        match ch {
            'x' => is_capture = true,
            'a'..='h' => file_hint = Some(ch as u8 - b'a'),
            '1'..='8' => rank_hint = Some(7 - (ch as u8 - b'1')),
            other => return Err(SanError::UnexpectedCharacter(other)),
        }
    }

    Ok(SanMove::Piece(PieceMove {
        kind,
        destination,
        is_capture,
        file_hint,
        rank_hint,
        promotion,
    }))
}
