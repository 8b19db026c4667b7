//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search keeps explicit maximizing and minimizing roles: every score is
//! from the evaluating color's point of view, the evaluating side maximizes
//! and its opponent minimizes. It runs apply/undo on a private snapshot, so
//! the caller's state is never touched.

use log::debug;

use crate::errors::ChessError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply, undo};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

/// Score of a checkmated side, from the winner's point of view.
pub const MATE_SCORE: i32 = 99_999;
const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// `None` at depth 0 and when the root has no legal move.
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Search with the default material + piece-square evaluation.
pub fn search(game_state: &GameState, depth: u8, evaluating_color: Color) -> Result<SearchResult, ChessError> {
    search_with_scorer(game_state, depth, evaluating_color, &PieceSquareScorer)
}

pub fn search_with_scorer<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    depth: u8,
    evaluating_color: Color,
    scorer: &S,
) -> Result<SearchResult, ChessError> {
    game_state.verify_kings()?;

    let mut scratch = game_state.snapshot();
    let maximizing = scratch.side_to_move == evaluating_color;
    let mut searcher = AlphaBeta {
        scorer,
        perspective: evaluating_color,
        nodes: 0,
    };

    let (score, best_move) = searcher.node(&mut scratch, depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing)?;

    debug!(
        "alpha-beta depth {depth} for {evaluating_color}: score {score}, nodes {}, best {:?}",
        searcher.nodes,
        best_move.map(|mv| mv.to_string())
    );

    Ok(SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    })
}

struct AlphaBeta<'a, S: ?Sized> {
    scorer: &'a S,
    perspective: Color,
    nodes: u64,
}

impl<S: BoardScorer + ?Sized> AlphaBeta<'_, S> {
    fn node(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<(i32, Option<Move>), ChessError> {
        self.nodes += 1;

        if depth == 0 {
            return Ok((self.scorer.score(&game_state.board, self.perspective), None));
        }

        let moves = legal_moves(game_state);
        if moves.is_empty() {
            let score = if !in_check(&game_state.board, game_state.side_to_move) {
                0
            } else if maximizing {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
            return Ok((score, None));
        }

        let mut best_score = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        let mut best_move = None;

        for mv in moves {
            apply(game_state, mv.from, mv.to)?;
            let child = self.node(game_state, depth - 1, alpha, beta, !maximizing);
            undo(game_state);
            let (score, _) = child?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
                if best_score >= beta {
                    break;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
                if best_score <= alpha {
                    break;
                }
            }
        }

        Ok((best_score, best_move))
    }
}
