//! FEN-to-GameState parser.
//!
//! The first FEN rank (rank 8) is board row 0. Kings are not validated here:
//! callers that need a well-formed game call `GameState::verify_kings`.

use crate::errors::ChessError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_from_name;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("halfmove clock {halfmove_part:?}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("fullmove number {fullmove_part:?}")))?;

    Ok(game_state)
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid(format!("rank {} has too many files", 8 - row)));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| invalid(format!("piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid(format!("rank {} has too many files", 8 - row)));
            }

            game_state.board.set(Square::new(row as u8, col)?, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.insert(CastlingRights::WHITE_KINGSIDE),
            'Q' => rights.insert(CastlingRights::WHITE_QUEENSIDE),
            'k' => rights.insert(CastlingRights::BLACK_KINGSIDE),
            'q' => rights.insert(CastlingRights::BLACK_QUEENSIDE),
            _ => return Err(invalid(format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    square_from_name(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("en-passant square {en_passant_part:?}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_fen_populates_board_and_flags() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(state.board.iter().count(), 32);
        assert_eq!(
            state.board.piece_at(Square::new(0, 3).expect("square")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            state.board.piece_at(Square::new(6, 7).expect("square")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(state.castling_rights, CastlingRights::ALL);
        assert_eq!(state.fullmove_number, 1);
    }

    #[test]
    fn en_passant_field_maps_to_row_and_column() {
        let state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("fen");
        assert_eq!(state.en_passant_target, Some(Square::new(2, 3).expect("square")));
        assert_eq!(state.fullmove_number, 3);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        for fen in [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "ppppppppp/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w X - 0 1",
            "8/8/8/8/8/8/8/8 w - z9 0 1",
            "8/8/8/8/8/8/8/8 w - - a 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
            "7x/8/8/8/8/8/8/8 w - - 0 1",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))), "{fen:?}");
        }
    }
}
