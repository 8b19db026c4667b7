//! Engine abstraction shared by the search scheduler and the self-play
//! harness.
//!
//! An engine turns a position into a proposed move. Engines never mutate the
//! position they are given; the caller applies the move it gets back.

use crate::errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Search score from the mover's point of view, when the engine has one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. Fails with
    /// [`ChessError::NoLegalMove`] when the position has none.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, ChessError>;
}
