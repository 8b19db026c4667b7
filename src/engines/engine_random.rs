//! Uniform random mover.
//!
//! Used as a weak sparring partner in self-play and to drive random playouts
//! in tests. Seeded, so a given seed always plays the same game.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "chess_core random"
    }

    fn choose_move(&mut self, game_state: &GameState, _params: &GoParams) -> Result<EngineOutput, ChessError> {
        let moves = legal_moves(game_state);
        let picked = *moves.choose(&mut self.rng).ok_or(ChessError::NoLegalMove)?;

        Ok(EngineOutput {
            best_move: Some(picked),
            score: None,
            info_lines: vec![format!("info string random_engine legal_moves {}", moves.len())],
        })
    }
}
