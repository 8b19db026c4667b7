//! Occupancy-aware ray attacks for bishops, rooks and queens.
//!
//! A ray includes the first occupied square it meets (that piece is attacked
//! or capturable) and nothing beyond it.

use crate::game_state::chess_types::{PieceKind, Square};

const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_STEPS
        .iter()
        .fold(0, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_STEPS
        .iter()
        .fold(0, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Ray attacks for a sliding kind; zero for non-sliders.
#[inline]
pub fn slider_attacks(kind: PieceKind, square: Square, occupancy: u64) -> u64 {
    match kind {
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 0,
    }
}

fn trace_ray(origin: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = origin.offset(d_row, d_col);

    while let Some(square) = cursor {
        let bit = square.bit();
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
        cursor = square.offset(d_row, d_col);
    }

    attacks
}
