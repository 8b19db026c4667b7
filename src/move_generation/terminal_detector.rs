//! Game-over classification.

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Classify `game_state`, checking checkmate, stalemate, the fifty-move rule
/// and insufficient material in that order.
pub fn classify(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move;

    if !has_legal_move(game_state) {
        return if in_check(&game_state.board, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    if is_insufficient_material(game_state) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }

    GameStatus::Ongoing
}

/// Coarse material test: only knights and bishops besides the kings, with at
/// most two of each on the whole board.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let board = &game_state.board;
    let heavy_or_pawn = board.count(PieceKind::Pawn) + board.count(PieceKind::Rook) + board.count(PieceKind::Queen);

    heavy_or_pawn == 0 && board.count(PieceKind::Knight) <= 2 && board.count(PieceKind::Bishop) <= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(fen: &str) -> GameStatus {
        classify(&GameState::from_fen(fen).expect("fen"))
    }

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(classify(&GameState::new_game()), GameStatus::Ongoing);
        assert!(!GameStatus::Ongoing.is_terminal());
    }

    #[test]
    fn back_rank_mate_names_the_winner() {
        let status = status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(status, GameStatus::Checkmate { winner: Color::White });
        assert!(status.is_terminal());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        assert_eq!(status_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn fifty_move_threshold() {
        let position = "4k3/8/8/8/8/8/4P3/4K3 w - - {} 80";
        let at = status_of(&position.replace("{}", "100"));
        let below = status_of(&position.replace("{}", "99"));
        assert_eq!(at, GameStatus::Draw(DrawReason::FiftyMoveRule));
        assert_eq!(below, GameStatus::Ongoing);
    }

    #[test]
    fn minor_pieces_only_is_a_draw() {
        assert_eq!(
            status_of("4k3/8/3n4/8/8/3N4/8/4K3 w - - 0 1"),
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        );
        assert_eq!(status_of("4k3/8/3n4/8/8/3N4/8/3QK3 w - - 0 1"), GameStatus::Ongoing);
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        );
    }

    #[test]
    fn checkmate_wins_over_fifty_move_draw() {
        assert_eq!(
            status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 90"),
            GameStatus::Checkmate { winner: Color::White }
        );
    }
}
