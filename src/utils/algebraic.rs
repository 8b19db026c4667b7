//! Square names such as `e4`.
//!
//! Formatting lives on `Square`'s `Display`; this module parses names back.
//! File `a` is column 0 and rank `8` is row 0.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

pub fn square_from_name(name: &str) -> Result<Square, ChessError> {
    let &[file, rank] = name.as_bytes() else {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
}
