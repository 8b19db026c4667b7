//! Bishop, rook and queen destinations.

use crate::game_state::{board::Board, chess_types::*};
use crate::moves::slider_attacks::slider_attacks;

/// Ray destinations for a sliding piece: every square up to and including
/// the first blocker, minus own pieces.
#[inline]
pub fn slider_destinations(board: &Board, from: Square, piece: Piece) -> u64 {
    slider_attacks(piece.kind, from, board.occupancy()) & !board.occupancy_of(piece.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn pieces_boxed_in_at_start_have_no_moves() {
        let state = GameState::new_game();
        for col in [0u8, 2, 3, 5, 7] {
            let from = Square::new(7, col).expect("square");
            let piece = state.board.piece_at(from).expect("piece");
            assert_eq!(slider_destinations(&state.board, from, piece), 0);
        }
    }

    #[test]
    fn rook_captures_enemy_blocker_but_not_own() {
        let state = GameState::from_fen("4k3/8/8/r2R2N1/8/8/8/4K3 w - - 0 1").expect("fen");
        let d5 = Square::new(3, 3).expect("square");
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let targets = slider_destinations(&state.board, d5, rook);

        assert_ne!(targets & Square::new(3, 0).expect("square").bit(), 0);
        assert_eq!(targets & Square::new(3, 6).expect("square").bit(), 0);
        assert_ne!(targets & Square::new(3, 5).expect("square").bit(), 0);
        assert_ne!(targets & Square::new(0, 3).expect("square").bit(), 0);
    }
}
