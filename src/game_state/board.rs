//! 8x8 piece placement.
//!
//! `Board` is a plain container: a mailbox of optional pieces plus
//! per-color/per-kind bitboards kept in sync by [`Board::set`]. It holds no
//! rule logic and trusts its callers.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
    occupancy_all: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Place `piece` (or nothing) on `square`, returning what was there.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let slot = square.index() as usize;
        let mask = square.bit();
        let previous = self.squares[slot];

        if let Some(old) = previous {
            self.pieces[old.color.index()][old.kind.index()] &= !mask;
            self.occupancy_by_color[old.color.index()] &= !mask;
            self.occupancy_all &= !mask;
        }
        if let Some(new) = piece {
            self.pieces[new.color.index()][new.kind.index()] |= mask;
            self.occupancy_by_color[new.color.index()] |= mask;
            self.occupancy_all |= mask;
        }

        self.squares[slot] = piece;
        previous
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.occupancy_all & square.bit() == 0
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.occupancy_all
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        squares_of(self.pieces_of(color, PieceKind::King)).next()
    }

    /// Number of pieces of `kind` on the board, both colors together.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.pieces[0][kind.index()].count_ones() + self.pieces[1][kind.index()].count_ones()
    }

    /// Occupied squares with their pieces in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        squares_of(self.occupancy_all).filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}
