use crate::game_state::chess_types::*;

/// Special-move tag carried by a [`MoveRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    DoubleStep,
    EnPassantCapture,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

/// Single undo record for `apply` / `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,

    pub prev_en_passant_target: Option<Square>,
    pub prev_castling_rights: CastlingRights,
    pub prev_halfmove_clock: u16,

    pub special: SpecialMove,
}

impl MoveRecord {
    #[inline]
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Square the captured piece stood on. Differs from `to` only for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        match self.special {
            SpecialMove::EnPassantCapture => Square::at(self.from.row(), self.to.col()),
            _ => self.to,
        }
    }
}
