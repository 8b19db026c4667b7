//! Authoritative game state.
//!
//! `GameState` owns the board, turn/state flags, clocks and the move-record
//! stack used by apply/undo workflows. The interactive session and the search
//! both operate on values of this type; the search always on its own copy.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Apply/undo stack ---
    pub move_history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position with full castling rights.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                state
                    .board
                    .set(Square::at(color.back_row(), col), Some(Piece::new(color, *kind)));
                state.board.set(
                    Square::at(color.pawn_home_row(), col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        state.castling_rights = CastlingRights::ALL;
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Number of moves applied to this value since it was built.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    /// Copy of the position without its history, for private exploration.
    pub fn snapshot(&self) -> Self {
        Self {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            move_history: Vec::new(),
        }
    }

    /// Fails with [`ChessError::MissingKing`] when either king is gone.
    ///
    /// A missing king can only come from a broken move application, so callers
    /// treat the error as fatal.
    pub fn verify_kings(&self) -> Result<(), ChessError> {
        for color in [Color::White, Color::Black] {
            if self.board.king_square(color).is_none() {
                return Err(ChessError::MissingKing(color));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.board.iter().count(), 32);
        assert_eq!(built.side_to_move, Color::White);
        assert_eq!(built.castling_rights, CastlingRights::ALL);
        assert_eq!(built.en_passant_target, None);
        assert_eq!(built.halfmove_clock, 0);
    }

    #[test]
    fn starting_layout_puts_white_on_row_seven() {
        let state = GameState::new_game();
        let e1 = Square::new(7, 4).expect("square");
        let e8 = Square::new(0, 4).expect("square");
        assert_eq!(state.board.piece_at(e1), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(state.board.piece_at(e8), Some(Piece::new(Color::Black, PieceKind::King)));
    }

    #[test]
    fn verify_kings_reports_missing_king() {
        let mut state = GameState::new_game();
        assert!(state.verify_kings().is_ok());
        state.board.set(Square::new(0, 4).expect("square"), None);
        assert!(matches!(state.verify_kings(), Err(ChessError::MissingKing(Color::Black))));
    }
}
