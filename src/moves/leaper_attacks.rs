//! Precomputed attack maps for pieces that jump to fixed offsets.
//!
//! Tables are indexed by `row * 8 + col`. Offsets are `(d_row, d_col)`.
//! Pawn tables are per color: White pawns capture toward row 0, Black pawns
//! toward row 7.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const WHITE_PAWN_OFFSETS: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const BLACK_PAWN_OFFSETS: [(i32, i32); 2] = [(1, -1), (1, 1)];

pub const KNIGHT_ATTACKS: [u64; 64] = build_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = build_table(&KING_OFFSETS);
pub const WHITE_PAWN_ATTACKS: [u64; 64] = build_table(&WHITE_PAWN_OFFSETS);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = build_table(&BLACK_PAWN_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index() as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index() as usize]
}

/// Squares a `color` pawn standing on `square` captures on.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square.index() as usize],
    }
}

const fn build_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (d_row, d_col) = offsets[i];
            attacks |= bit_if_on_board(row + d_row, col + d_col);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn bit_if_on_board(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }
    1u64 << ((row as usize) * 8 + (col as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square")
    }

    #[test]
    fn knight_in_center_has_eight_targets_and_corner_two() {
        assert_eq!(knight_attacks(sq(4, 3)).count_ones(), 8);
        assert_eq!(knight_attacks(sq(0, 0)).count_ones(), 2);
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        assert_eq!(king_attacks(sq(7, 0)).count_ones(), 3);
        assert_eq!(king_attacks(sq(3, 3)).count_ones(), 8);
    }

    #[test]
    fn white_pawn_attacks_toward_row_zero() {
        let e2 = sq(6, 4);
        let expected = sq(5, 3).bit() | sq(5, 5).bit();
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_on_edge_attacks_one_square() {
        let a7 = sq(1, 0);
        assert_eq!(pawn_attacks(Color::Black, a7), sq(2, 1).bit());
        assert_eq!(pawn_attacks(Color::Black, sq(7, 3)), 0);
    }
}
