//! Entry points for a front end.
//!
//! Every function here takes the game state explicitly; nothing is held in
//! globals. Each entry point checks both kings first and reports
//! [`ChessError::MissingKing`] on a broken position; the oracle functions
//! underneath assume that check has been made. A front end that wants
//! clocks, players and a background engine should use
//! [`crate::session::game_session::GameSession`] instead.

use std::collections::BTreeSet;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::errors::ChessError;
use crate::game_state::{chess_types::*, game_state::GameState, move_record::MoveRecord};
use crate::move_generation::legal_move_apply::apply;
use crate::move_generation::legal_move_generator::check_move;
use crate::move_generation::terminal_detector::{classify, GameStatus};
use crate::search::alpha_beta::search;

pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Squares the piece on `from` may legally move to. Empty when `from` is
/// empty or holds a piece of the side not on move.
pub fn legal_destinations(game_state: &GameState, from: Square) -> Result<BTreeSet<Square>, ChessError> {
    game_state.verify_kings()?;
    Ok(crate::move_generation::legal_move_generator::legal_destinations(
        game_state, from,
    ))
}

pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> Result<bool, ChessError> {
    game_state.verify_kings()?;
    Ok(crate::move_generation::legal_move_generator::is_legal_move(
        game_state, from, to,
    ))
}

/// Validate and play a move. On rejection the state is unchanged.
pub fn attempt_move(game_state: &mut GameState, from: Square, to: Square) -> Result<MoveRecord, ChessError> {
    game_state.verify_kings()?;
    check_move(game_state, from, to)?;
    Ok(apply(game_state, from, to)?)
}

pub fn status(game_state: &GameState) -> Result<GameStatus, ChessError> {
    game_state.verify_kings()?;
    Ok(classify(game_state))
}

/// Search a private snapshot on a background thread and hand the move chosen
/// for the side to move to `callback`. Applying the move is left to the
/// caller.
pub fn request_ai_move<F>(game_state: &GameState, depth: u8, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Move, ChessError>) + Send + 'static,
{
    let snapshot = game_state.snapshot();
    let side = snapshot.side_to_move;
    let depth = depth.max(1);
    debug!("background search for {side} at depth {depth}");

    thread::spawn(move || {
        let chosen = search(&snapshot, depth, side).and_then(|result| result.best_move.ok_or(ChessError::NoLegalMove));
        callback(chosen);
    })
}
