use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{search_with_scorer, SearchConfig};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

/// Fixed-depth minimax/alpha-beta player.
pub struct AlphaBetaEngine {
    config: SearchConfig,
    scorer: Box<dyn BoardScorer>,
}

impl AlphaBetaEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(depth, Box::new(PieceSquareScorer))
    }

    pub fn with_scorer(depth: u8, scorer: Box<dyn BoardScorer>) -> Self {
        Self {
            config: SearchConfig { depth: depth.max(1) },
            scorer,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "chess_core alpha-beta"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, ChessError> {
        let depth = params.depth.unwrap_or(self.config.depth).max(1);
        let side = game_state.side_to_move;
        let result = search_with_scorer(game_state, depth, side, self.scorer.as_ref())?;

        let best_move = result.best_move.ok_or(ChessError::NoLegalMove)?;

        let mut out = EngineOutput {
            best_move: Some(best_move),
            score: Some(result.score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} pv {}",
            depth, result.score, result.nodes, best_move
        ));
        if params.depth.is_some_and(|requested| requested != self.config.depth) {
            out.info_lines.push(format!(
                "info string alpha_beta_engine configured_depth {}",
                self.config.depth
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Move, Square};
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn chooses_the_winning_capture() {
        let state = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("fen");
        let mut engine = AlphaBetaEngine::new(1);
        let out = engine.choose_move(&state, &GoParams::default()).expect("move");
        let expected = Move::new(Square::new(7, 3).expect("square"), Square::new(3, 3).expect("square"));
        assert_eq!(out.best_move, Some(expected));
        assert_eq!(out.info_lines.len(), 1);
        assert!(out.info_lines[0].starts_with("info depth 1 score cp"));
    }

    #[test]
    fn no_legal_move_is_an_error() {
        let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen");
        let mut engine = AlphaBetaEngine::with_scorer(2, Box::new(MaterialScorer));
        assert!(matches!(
            engine.choose_move(&stalemate, &GoParams::default()),
            Err(ChessError::NoLegalMove)
        ));
    }

    #[test]
    fn depth_is_clamped_to_one() {
        let engine = AlphaBetaEngine::new(0);
        assert_eq!(engine.depth(), 1);
        let mut engine = engine;
        let out = engine
            .choose_move(&GameState::new_game(), &GoParams { depth: Some(0) })
            .expect("move");
        assert!(out.best_move.is_some());
    }
}
