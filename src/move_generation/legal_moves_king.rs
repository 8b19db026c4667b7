use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_KING_TARGET_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::attacks;
use crate::moves::leaper_attacks::king_attacks;

/// One-square steps onto squares the opponent does not attack, plus any
/// available castling destinations.
pub fn king_destinations(game_state: &GameState, from: Square, color: Color) -> u64 {
    let board = &game_state.board;
    let enemy = color.opposite();
    let mut targets = 0u64;

    for to in squares_of(king_attacks(from) & !board.occupancy_of(color)) {
        if !attacks(board, to, enemy) {
            targets |= to.bit();
        }
    }

    let home = Square::at(color.back_row(), KING_START_COL);
    if from == home {
        if can_castle(game_state, color, true) {
            targets |= Square::at(home.row(), KINGSIDE_KING_TARGET_COL).bit();
        }
        if can_castle(game_state, color, false) {
            targets |= Square::at(home.row(), QUEENSIDE_KING_TARGET_COL).bit();
        }
    }

    targets
}

/// Whether `color` may castle on the given wing right now.
///
/// Requires the rights flag, king and rook on their original squares, an
/// empty path between them, and no attack on the squares the king starts on,
/// crosses, or lands on.
pub fn can_castle(game_state: &GameState, color: Color, kingside: bool) -> bool {
    if !game_state
        .castling_rights
        .contains(CastlingRights::for_side(color, kingside))
    {
        return false;
    }

    let board = &game_state.board;
    let row = color.back_row();
    let king_home = Square::at(row, KING_START_COL);
    if board.piece_at(king_home) != Some(Piece::new(color, PieceKind::King)) {
        return false;
    }

    let (rook_col, king_target_col) = if kingside {
        (KINGSIDE_ROOK_COL, KINGSIDE_KING_TARGET_COL)
    } else {
        (QUEENSIDE_ROOK_COL, QUEENSIDE_KING_TARGET_COL)
    };
    if board.piece_at(Square::at(row, rook_col)) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    let (low, high) = if kingside {
        (KING_START_COL + 1, rook_col)
    } else {
        (rook_col + 1, KING_START_COL)
    };
    if (low..high).any(|col| !board.is_empty_at(Square::at(row, col))) {
        return false;
    }

    let (walk_low, walk_high) = if kingside {
        (KING_START_COL, king_target_col)
    } else {
        (king_target_col, KING_START_COL)
    };
    let enemy = color.opposite();
    !(walk_low..=walk_high).any(|col| attacks(board, Square::at(row, col), enemy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square")
    }

    #[test]
    fn castling_allowed_on_clear_back_rank() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        assert!(can_castle(&state, Color::White, true));
        assert!(can_castle(&state, Color::White, false));
        assert!(can_castle(&state, Color::Black, true));
        assert!(can_castle(&state, Color::Black, false));

        let targets = king_destinations(&state, sq(7, 4), Color::White);
        assert_ne!(targets & sq(7, 6).bit(), 0);
        assert_ne!(targets & sq(7, 2).bit(), 0);
    }

    #[test]
    fn castling_blocked_by_attack_on_crossed_square() {
        // Black rook on f8 covers f1.
        let state = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("fen");
        assert!(!can_castle(&state, Color::White, true));
        assert!(can_castle(&state, Color::White, false));
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        let state = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("fen");
        assert!(can_castle(&state, Color::White, false));
    }

    #[test]
    fn castling_needs_rights_empty_path_and_rook() {
        let no_rights = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("fen");
        assert!(!can_castle(&no_rights, Color::White, true));

        let blocked = GameState::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").expect("fen");
        assert!(!can_castle(&blocked, Color::White, false));
        assert!(can_castle(&blocked, Color::White, true));

        let no_rook = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").expect("fen");
        assert!(!can_castle(&no_rook, Color::White, false));
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("fen");
        assert!(can_castle(&state, Color::White, true));
        let checked = GameState::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("fen");
        assert!(!can_castle(&checked, Color::White, true));
        assert!(!can_castle(&checked, Color::White, false));
    }

    #[test]
    fn king_does_not_step_into_attack() {
        let state = GameState::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        let targets = king_destinations(&state, sq(7, 4), Color::White);
        assert_eq!(targets & sq(7, 3).bit(), 0);
        assert_eq!(targets & sq(6, 3).bit(), 0);
        assert_ne!(targets & sq(6, 4).bit(), 0);
    }
}
