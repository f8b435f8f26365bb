//! Source-square resolution: given a classified move and the side to
//! move, find the unique piece that could have written that token. Every
//! strategy is a read-only query over the board; mutation stays in the
//! applicator.

use crate::{
    board::Board,
    constants::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    types::{Piece, PieceKind, PieceMove, Side, Square},
};

/// Returns the source square for the move, or `None` when no matching
/// piece is found. `None` must be surfaced by the caller; guessing would
/// leave the board inconsistent with the notation.
pub fn locate_source(board: &Board, side: Side, mv: &PieceMove) -> Option<Square> {
    match mv.kind {
        PieceKind::Pawn => locate_pawn(board, side, mv),
        PieceKind::Knight => locate_knight(board, side, mv),
        PieceKind::Bishop => scan_rays(board, side, PieceKind::Bishop, &BISHOP_DIRECTIONS, mv),
        PieceKind::Rook => locate_rook(board, side, mv),
        // Queens are resolved geometrically rather than via a tracked
        // square, so a promoted second queen resolves correctly.
        PieceKind::Queen => scan_rays(board, side, PieceKind::Queen, &QUEEN_DIRECTIONS, mv),
        PieceKind::King => Some(board.king(side)),
    }
}

fn holds(board: &Board, square: Square, side: Side, kind: PieceKind) -> bool {
    board.piece_at(square) == Some(Piece::new(kind, side))
}

fn matches_hints(square: Square, mv: &PieceMove) -> bool {
    mv.file_hint.is_none_or(|file| square.file() == file)
        && mv.rank_hint.is_none_or(|rank| square.rank() == rank)
}

/// Pawn sources are fully determined by the token: captures name their
/// source file and sit one rank back; pushes share the destination file
/// and sit one or (for the initial double step) two ranks back.
fn locate_pawn(board: &Board, side: Side, mv: &PieceMove) -> Option<Square> {
    let direction = side.pawn_direction();
    let destination = mv.destination;

    if mv.is_capture {
        let file = mv.file_hint?;
        let source = Square::new(destination.rank(), file).offset(direction, 0)?;

        return holds(board, source, side, PieceKind::Pawn).then_some(source);
    }

    for steps in 1..=2 {
        let Some(source) = destination.offset(direction * steps, 0) else {
            break;
        };

        if holds(board, source, side, PieceKind::Pawn) {
            return Some(source);
        }
    }

    None
}

fn locate_knight(board: &Board, side: Side, mv: &PieceMove) -> Option<Square> {
    KNIGHT_OFFSETS.iter().find_map(|&(rank_step, file_step)| {
        let candidate = mv.destination.offset(rank_step, file_step)?;

        (matches_hints(candidate, mv) && holds(board, candidate, side, PieceKind::Knight))
            .then_some(candidate)
    })
}

/// A hinted rook is pinned directly: the hint supplies one coordinate and
/// the destination the other. Unhinted rooks fall back to the ray scan.
fn locate_rook(board: &Board, side: Side, mv: &PieceMove) -> Option<Square> {
    let destination = mv.destination;

    let pinned = match (mv.file_hint, mv.rank_hint) {
        (None, None) => return scan_rays(board, side, PieceKind::Rook, &ROOK_DIRECTIONS, mv),
        (Some(file), Some(rank)) => Square::new(rank, file),
        (Some(file), None) => Square::new(destination.rank(), file),
        (None, Some(rank)) => Square::new(rank, destination.file()),
    };

    holds(board, pinned, side, PieceKind::Rook).then_some(pinned)
}

/// Walks each ray outward from the destination and inspects the first
/// occupied square: a same-side piece of the right kind (matching any
/// hints) is the source; anything else blocks the ray. The first matching
/// ray wins; SAN from conforming writers never leaves two rays matching.
fn scan_rays(
    board: &Board,
    side: Side,
    kind: PieceKind,
    directions: &[(i8, i8)],
    mv: &PieceMove,
) -> Option<Square> {
    for &(rank_step, file_step) in directions {
        let mut square = mv.destination;

        while let Some(next) = square.offset(rank_step, file_step) {
            square = next;

            if board.piece_at(square).is_some() {
                if holds(board, square, side, kind) && matches_hints(square, mv) {
                    return Some(square);
                }

                break;
            }
        }
    }

    None
}
