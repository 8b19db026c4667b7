//! Value types shared by every subsystem: colors, piece kinds, squares,
//! castling-rights flags and coordinate moves.
//!
//! Squares use a `(row, col)` layout where row 0 is Black's back rank and
//! row 7 is White's. The packed index `row * 8 + col` is the bit position used
//! by the attack tables and occupancy bitboards, so ascending index order is
//! row-major order.

use std::fmt;

use crate::errors::ChessError;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A validated board coordinate.
///
/// Construction through [`Square::new`] rejects anything outside `[0, 7]`
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, ChessError> {
        if row > 7 || col > 7 {
            return Err(ChessError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Index-based constructor for bitboard scans; `index` must be `< 64`.
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Self {
        Self {
            row: index / 8,
            col: index % 8,
        }
    }

    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Square reached by stepping `(d_row, d_col)`, if it stays on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// Walk the set bits of a bitboard in ascending (row-major) order.
pub(crate) fn squares_of(mut bits: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }
        let index = bits.trailing_zeros() as u8;
        bits &= bits - 1;
        Some(Square::from_index(index))
    })
}

/// Four independent castling flags packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);
    pub const WHITE_KINGSIDE: Self = Self(1 << 0);
    pub const WHITE_QUEENSIDE: Self = Self(1 << 1);
    pub const BLACK_KINGSIDE: Self = Self(1 << 2);
    pub const BLACK_QUEENSIDE: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    #[inline]
    pub const fn for_side(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => Self::WHITE_KINGSIDE,
            (Color::White, false) => Self::WHITE_QUEENSIDE,
            (Color::Black, true) => Self::BLACK_KINGSIDE,
            (Color::Black, false) => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn both_for(color: Color) -> Self {
        match color {
            Color::White => Self(Self::WHITE_KINGSIDE.0 | Self::WHITE_QUEENSIDE.0),
            Color::Black => Self(Self::BLACK_KINGSIDE.0 | Self::BLACK_QUEENSIDE.0),
        }
    }

    /// Flag guarded by a rook standing on `square`, if it is an original corner.
    #[inline]
    pub const fn for_corner(square: Square) -> Self {
        match (square.row(), square.col()) {
            (7, 0) => Self::WHITE_QUEENSIDE,
            (7, 7) => Self::WHITE_KINGSIDE,
            (0, 0) => Self::BLACK_QUEENSIDE,
            (0, 7) => Self::BLACK_KINGSIDE,
            _ => Self::NONE,
        }
    }

    #[inline]
    pub const fn contains(self, flags: Self) -> bool {
        flags.0 != 0 && (self.0 & flags.0) == flags.0
    }

    #[inline]
    pub fn insert(&mut self, flags: Self) {
        self.0 |= flags.0;
    }

    #[inline]
    pub fn remove(&mut self, flags: Self) {
        self.0 &= !flags.0;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A coordinate pair as handed over by the interactive layer or the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
