//! Move-text tokenization: turns raw PGN text into the ordered move-pair
//! sequence the replayer consumes. Tag pairs, escape lines, brace
//! comments, move numbers, NAGs, and `!`/`?` suffix annotations are all
//! stripped here so the replay core only ever sees bare SAN tokens.

use crate::types::MovePair;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PgnError {
    #[error("failed to read PGN file `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a PGN file and tokenizes its move-text.
pub fn load_game(path: impl AsRef<Path>) -> Result<Vec<MovePair>, PgnError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| PgnError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(parse_movetext(&text))
}

/// Tokenizes PGN text into move pairs. Tokens are paired up in order as
/// (White, Black); an odd trailing token becomes a pair with no Black
/// reply, which the replayer treats as the game ending after White's
/// move.
pub fn parse_movetext(text: &str) -> Vec<MovePair> {
    let mut tokens = Vec::new();
    let mut in_comment = false;

    for line in text.lines() {
        if !in_comment {
            let trimmed = line.trim_start();

            if trimmed.starts_with('[') || trimmed.starts_with('%') {
                continue;
            }
        }

        let cleaned = strip_comments(line, &mut in_comment);

        for word in cleaned.split_whitespace() {
            if let Some(token) = normalize_token(word) {
                tokens.push(token.to_string());
            }
        }
    }

    pair_up(tokens)
}

/// Removes `{...}` comments, tracking comments that span line boundaries.
fn strip_comments(line: &str, in_comment: &mut bool) -> String {
    let mut cleaned = String::with_capacity(line.len());

    for ch in line.chars() {
        match ch {
            '{' if !*in_comment => *in_comment = true,
            '}' if *in_comment => {
                *in_comment = false;
                cleaned.push(' ');
            }
            _ if *in_comment => {}
            _ => cleaned.push(ch),
        }
    }

    cleaned
}

/// Drops move numbers ("3." or "3...", attached or standalone) and NAGs
/// ("$14"), and strips trailing `!`/`?` annotations. Returns `None` when
/// nothing of the word survives.
fn normalize_token(word: &str) -> Option<&str> {
    if word.starts_with('$') {
        return None;
    }

    let after_digits = word.trim_start_matches(|ch: char| ch.is_ascii_digit());

    // Only a digits-then-dots prefix is a move number; "1-0" and
    // "1/2-1/2" keep their leading digits.
    let rest = if after_digits.len() < word.len() && after_digits.starts_with('.') {
        after_digits.trim_start_matches('.')
    } else {
        word
    };

    let rest = rest.trim_end_matches(['!', '?']);

    (!rest.is_empty()).then_some(rest)
}

fn pair_up(tokens: Vec<String>) -> Vec<MovePair> {
    let mut pairs = Vec::new();
    let mut pending_white: Option<String> = None;

    for token in tokens {
        match pending_white.take() {
            None => pending_white = Some(token),
            Some(white) => pairs.push(MovePair {
                white,
                black: Some(token),
            }),
        }
    }

    if let Some(white) = pending_white {
        pairs.push(MovePair { white, black: None });
    }

    pairs
}
