//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use chess_core::engines::engine_alpha_beta::AlphaBetaEngine;
use chess_core::engines::engine_trait::Engine;
use chess_core::errors::ChessError;
use chess_core::search::board_scoring::MaterialScorer;
use chess_core::utils::engine_match_harness::{play_engine_match_series, MatchConfig, MatchSeriesConfig};

fn main() -> Result<(), ChessError> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // Swap these to compare scorers or depths.
    let player1 = || Box::new(AlphaBetaEngine::new(3)) as Box<dyn Engine>;
    let player2 = || Box::new(AlphaBetaEngine::with_scorer(3, Box::new(MaterialScorer))) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
