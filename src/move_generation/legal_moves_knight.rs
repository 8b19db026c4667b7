use crate::game_state::{board::Board, chess_types::*};
use crate::moves::leaper_attacks::knight_attacks;

#[inline]
pub fn knight_destinations(board: &Board, from: Square, color: Color) -> u64 {
    knight_attacks(from) & !board.occupancy_of(color)
}
