use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::pawn_attacks;

/// Pattern destinations for a `color` pawn on `from`, before check-safety.
///
/// Covers the single step, the double step from the home row, diagonal
/// captures, and the en-passant capture onto the current target square.
pub fn pawn_destinations(game_state: &GameState, from: Square, color: Color) -> u64 {
    let board = &game_state.board;
    let mut targets = 0u64;

    if let Some(one_step) = from.offset(color.forward(), 0) {
        if board.is_empty_at(one_step) {
            targets |= one_step.bit();

            if from.row() == color.pawn_home_row() {
                if let Some(two_step) = one_step.offset(color.forward(), 0) {
                    if board.is_empty_at(two_step) {
                        targets |= two_step.bit();
                    }
                }
            }
        }
    }

    let diagonals = pawn_attacks(color, from);
    targets |= diagonals & board.occupancy_of(color.opposite());

    if let Some(ep) = game_state.en_passant_target {
        if diagonals & ep.bit() != 0 && board.is_empty_at(ep) && has_en_passant_victim(game_state, from, ep, color)
        {
            targets |= ep.bit();
        }
    }

    targets
}

// The victim stands on the mover's row in the target's column.
fn has_en_passant_victim(game_state: &GameState, from: Square, target: Square, color: Color) -> bool {
    game_state.board.piece_at(Square::at(from.row(), target.col()))
        == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square")
    }

    fn targets(state: &GameState, from: Square) -> Vec<Square> {
        let color = state.board.piece_at(from).expect("pawn").color;
        squares_of(pawn_destinations(state, from, color)).collect()
    }

    #[test]
    fn home_row_pawn_has_single_and_double_step() {
        let state = GameState::new_game();
        assert_eq!(targets(&state, sq(6, 4)), vec![sq(4, 4), sq(5, 4)]);
        assert_eq!(targets(&state, sq(1, 0)), vec![sq(2, 0), sq(3, 0)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let state = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("fen");
        assert!(targets(&state, sq(6, 4)).is_empty());
    }

    #[test]
    fn diagonal_requires_enemy_piece() {
        let state = GameState::from_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1").expect("fen");
        assert_eq!(targets(&state, sq(6, 4)), vec![sq(4, 4), sq(5, 3), sq(5, 4)]);
    }

    #[test]
    fn en_passant_target_is_reachable() {
        let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("fen");
        assert_eq!(targets(&state, sq(3, 4)), vec![sq(2, 3), sq(2, 4)]);
    }
}
