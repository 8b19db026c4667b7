//! Legality oracle and legal move enumeration.
//!
//! Every legality answer in the crate goes through [`check_move`]: the
//! interactive path, the destination highlighter, perft and the search all
//! share it. Enumeration order is row-major by origin, then row-major by
//! destination.

use std::collections::BTreeSet;

use crate::errors::MoveRejected;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{classify_special, play_on_board};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_moves_king::king_destinations;
use crate::move_generation::legal_moves_knight::knight_destinations;
use crate::move_generation::legal_moves_pawn::pawn_destinations;
use crate::move_generation::legal_moves_sliders::slider_destinations;

/// Destinations allowed by `piece`'s movement pattern from `from`, ignoring
/// check-safety. Own-occupied squares are never included.
pub fn candidate_destinations(game_state: &GameState, from: Square, piece: Piece) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(game_state, from, piece.color),
        PieceKind::Knight => knight_destinations(&game_state.board, from, piece.color),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_destinations(&game_state.board, from, piece)
        }
        PieceKind::King => king_destinations(game_state, from, piece.color),
    }
}

/// Validate `from -> to` for the side to move, reporting the first failed rule.
///
/// Rules are checked in order: a piece on `from`, owned by the side to move,
/// `from != to`, destination not held by an own piece, the movement pattern,
/// and finally that the mover's king is not left attacked.
pub fn check_move(game_state: &GameState, from: Square, to: Square) -> Result<(), MoveRejected> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(MoveRejected::NoPieceAtOrigin)?;

    if piece.color != game_state.side_to_move {
        return Err(MoveRejected::NotSideToMove);
    }
    if from == to {
        return Err(MoveRejected::NullMove);
    }
    if let Some(occupant) = game_state.board.piece_at(to) {
        if occupant.color == piece.color {
            return Err(MoveRejected::DestinationOccupiedByOwnPiece);
        }
    }
    if candidate_destinations(game_state, from, piece) & to.bit() == 0 {
        return Err(MoveRejected::InvalidPattern(piece.kind));
    }
    if !leaves_king_safe(game_state, from, to, piece) {
        return Err(MoveRejected::LeavesKingInCheck);
    }

    Ok(())
}

#[inline]
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    check_move(game_state, from, to).is_ok()
}

/// Play the move on a scratch board and ask whether the mover is in check.
fn leaves_king_safe(game_state: &GameState, from: Square, to: Square, piece: Piece) -> bool {
    let mut scratch = game_state.board.clone();
    let special = classify_special(&scratch, from, to, piece, game_state.en_passant_target);
    play_on_board(&mut scratch, from, to, piece, special);
    !in_check(&scratch, piece.color)
}

/// Every `to` for which [`is_legal_move`] holds from `from`.
pub fn legal_destinations(game_state: &GameState, from: Square) -> BTreeSet<Square> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return BTreeSet::new();
    };
    if piece.color != game_state.side_to_move {
        return BTreeSet::new();
    }

    squares_of(candidate_destinations(game_state, from, piece))
        .filter(|&to| leaves_king_safe(game_state, from, to, piece))
        .collect()
}

/// All legal moves for the side to move in enumeration order.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for from in squares_of(game_state.board.occupancy_of(game_state.side_to_move)) {
        moves.extend(
            legal_destinations(game_state, from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Cheaper than `!legal_moves(..).is_empty()`: stops at the first move found.
pub fn has_legal_move(game_state: &GameState) -> bool {
    squares_of(game_state.board.occupancy_of(game_state.side_to_move)).any(|from| {
        game_state.board.piece_at(from).is_some_and(|piece| {
            squares_of(candidate_destinations(game_state, from, piece))
                .any(|to| leaves_king_safe(game_state, from, to, piece))
        })
    })
}
