//! Move execution and reversal.
//!
//! `apply` mutates a [`GameState`] in place and pushes a [`MoveRecord`];
//! `undo` pops it and restores the prior position exactly. Legality is the
//! caller's job: `apply` only refuses a move with no piece on its origin.

use crate::errors::MoveRejected;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, KING_START_COL,
    PROMOTION_KIND, QUEENSIDE_KING_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
};
use crate::game_state::move_record::{MoveRecord, SpecialMove};
use crate::game_state::{chess_types::*, game_state::GameState};

/// Tag a geometric move with the special rule it triggers, if any.
pub fn classify_special(
    board: &Board,
    from: Square,
    to: Square,
    moved: Piece,
    en_passant_target: Option<Square>,
) -> SpecialMove {
    match moved.kind {
        PieceKind::Pawn => {
            if to.row() == moved.color.promotion_row() {
                SpecialMove::Promotion
            } else if from.row().abs_diff(to.row()) == 2 {
                SpecialMove::DoubleStep
            } else if from.col() != to.col() && Some(to) == en_passant_target && board.is_empty_at(to) {
                SpecialMove::EnPassantCapture
            } else {
                SpecialMove::None
            }
        }
        PieceKind::King if from.col() == KING_START_COL && from.row() == to.row() => {
            match to.col() {
                KINGSIDE_KING_TARGET_COL => SpecialMove::CastleKingside,
                QUEENSIDE_KING_TARGET_COL => SpecialMove::CastleQueenside,
                _ => SpecialMove::None,
            }
        }
        _ => SpecialMove::None,
    }
}

/// Relocate pieces on `board` for one move and return the captured piece.
///
/// This is the only place board contents change for a move. Check-safety
/// tests run it on a scratch copy; `apply` runs it on the real board.
pub fn play_on_board(
    board: &mut Board,
    from: Square,
    to: Square,
    moved: Piece,
    special: SpecialMove,
) -> Option<Piece> {
    board.set(from, None);

    let captured = match special {
        SpecialMove::EnPassantCapture => {
            board.set(to, Some(moved));
            board.set(Square::at(from.row(), to.col()), None)
        }
        SpecialMove::Promotion => board.set(to, Some(Piece::new(moved.color, PROMOTION_KIND))),
        _ => board.set(to, Some(moved)),
    };

    match special {
        SpecialMove::CastleKingside => {
            move_rook(board, moved.color, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL);
        }
        SpecialMove::CastleQueenside => {
            move_rook(board, moved.color, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL);
        }
        _ => {}
    }

    captured
}

/// Execute a move that has already been validated.
pub fn apply(game_state: &mut GameState, from: Square, to: Square) -> Result<MoveRecord, MoveRejected> {
    let moved = game_state
        .board
        .piece_at(from)
        .ok_or(MoveRejected::NoPieceAtOrigin)?;
    let special = classify_special(&game_state.board, from, to, moved, game_state.en_passant_target);

    let prev_en_passant_target = game_state.en_passant_target;
    let prev_castling_rights = game_state.castling_rights;
    let prev_halfmove_clock = game_state.halfmove_clock;

    let captured = play_on_board(&mut game_state.board, from, to, moved, special);

    game_state.en_passant_target = match special {
        SpecialMove::DoubleStep => Some(Square::at((from.row() + to.row()) / 2, from.col())),
        _ => None,
    };

    if moved.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }

    update_castling_rights(&mut game_state.castling_rights, moved, from, to);

    if moved.color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = moved.color.opposite();

    let record = MoveRecord {
        from,
        to,
        moved,
        captured,
        prev_en_passant_target,
        prev_castling_rights,
        prev_halfmove_clock,
        special,
    };
    game_state.move_history.push(record);
    Ok(record)
}

/// Reverse the most recent `apply`. Returns `None` on an empty history.
pub fn undo(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.move_history.pop()?;
    let board = &mut game_state.board;

    board.set(record.to, None);
    board.set(record.from, Some(record.moved));

    match record.special {
        SpecialMove::EnPassantCapture => {
            board.set(record.capture_square(), record.captured);
        }
        SpecialMove::CastleKingside => {
            move_rook(board, record.moved.color, KINGSIDE_ROOK_TARGET_COL, KINGSIDE_ROOK_COL);
        }
        SpecialMove::CastleQueenside => {
            move_rook(board, record.moved.color, QUEENSIDE_ROOK_TARGET_COL, QUEENSIDE_ROOK_COL);
        }
        _ => {
            board.set(record.to, record.captured);
        }
    }

    game_state.en_passant_target = record.prev_en_passant_target;
    game_state.castling_rights = record.prev_castling_rights;
    game_state.halfmove_clock = record.prev_halfmove_clock;
    game_state.side_to_move = record.moved.color;
    if record.moved.color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    Some(record)
}

fn move_rook(board: &mut Board, color: Color, from_col: u8, to_col: u8) {
    let row = color.back_row();
    let rook = board.set(Square::at(row, from_col), None);
    board.set(Square::at(row, to_col), rook);
}

fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, from: Square, to: Square) {
    if moved.kind == PieceKind::King {
        rights.remove(CastlingRights::both_for(moved.color));
    }
    // A rook leaving its corner, or anything landing on one, ends that right.
    rights.remove(CastlingRights::for_corner(from));
    rights.remove(CastlingRights::for_corner(to));
}
