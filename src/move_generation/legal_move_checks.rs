//! Attack queries over a bare board.
//!
//! These answer "is this square attacked" from precomputed leaper tables and
//! occupancy-aware slider rays, without looking at whose turn it is.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

/// True when any piece of `by_color` attacks `square`.
///
/// Pawns attack diagonally forward only, so a pawn never attacks the square
/// straight ahead of it.
pub fn attacks(board: &Board, square: Square, by_color: Color) -> bool {
    // A `by_color` pawn attacks `square` exactly when an opposite-colored pawn
    // on `square` would attack the pawn's square.
    if pawn_attacks(by_color.opposite(), square) & board.pieces_of(by_color, PieceKind::Pawn) != 0 {
        return true;
    }

    if knight_attacks(square) & board.pieces_of(by_color, PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & board.pieces_of(by_color, PieceKind::King) != 0 {
        return true;
    }

    let occupancy = board.occupancy();
    let queens = board.pieces_of(by_color, PieceKind::Queen);

    let diagonal = board.pieces_of(by_color, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy) & diagonal != 0 {
        return true;
    }

    let orthogonal = board.pieces_of(by_color, PieceKind::Rook) | queens;
    rook_attacks(square, occupancy) & orthogonal != 0
}

/// True when `color`'s king is attacked. A board without that king is never
/// in check; the public entry points reject such boards with `MissingKing`
/// before reaching here.
#[inline]
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    attacks(board, king_sq, color.opposite())
}
