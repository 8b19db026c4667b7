//! Head-to-head engine matches for self-play smoke testing.
//!
//! Two `Engine` implementations play each other straight through the rules
//! layer, after an optional seeded random opening prefix.

use std::time::Instant;

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::interface::attempt_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::terminal_detector::{classify, DrawReason, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    DrawInsufficientMaterial,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner: Color::White } => Some(MatchOutcome::WhiteWinCheckmate),
            GameStatus::Checkmate { winner: Color::Black } => Some(MatchOutcome::BlackWinCheckmate),
            GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameStatus::Draw(DrawReason::FiftyMoveRule) => Some(MatchOutcome::DrawFiftyMoveRule),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => Some(MatchOutcome::DrawInsufficientMaterial),
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    Draw(MatchOutcome),
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms()
        )
    }
}

/// Play a single seeded match from the starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    let (state, opening_moves) = apply_seeded_random_opening(
        GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    play_from(state, opening_moves, engine_white, engine_black, config)
}

/// Play a match from a caller-provided position, without an opening prefix.
pub fn play_engine_match_from_state(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    play_from(start_state, Vec::new(), engine_white, engine_black, config)
}

fn play_from(
    mut state: GameState,
    opening_moves: Vec<Move>,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    engine_white.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: GameState::new_empty(),
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        state.verify_kings()?;
        if let Some(outcome) = MatchOutcome::from_status(classify(&state)) {
            result.outcome = outcome;
            break;
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                result.white_move_count += 1;
                result.white_total_time_ns += elapsed_ns;
            }
            Color::Black => {
                result.black_move_count += 1;
                result.black_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out.best_move.ok_or(ChessError::NoLegalMove)?;
        attempt_move(&mut state, chosen.from, chosen.to)?;
        result.played_moves.push(chosen);
    }

    // A game that ends exactly on the ply limit is still classified.
    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = MatchOutcome::from_status(classify(&state)) {
            result.outcome = outcome;
        }
    }

    debug!(
        "match over after {} plies: {:?}",
        result.played_moves.len(),
        result.outcome
    );
    result.final_state = state;
    Ok(result)
}

/// Play a series and aggregate results. Colors are drawn per game from a
/// generator seeded with `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, ChessError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            "game {}/{} seed={} white={} black={}",
            i + 1,
            config.games,
            seed,
            if player1_is_white { player1.name() } else { player2.name() },
            if player1_is_white { player2.name() } else { player1.name() },
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (result.white_move_count, result.white_total_time_ns, result.black_move_count, result.black_total_time_ns)
        } else {
            (result.black_move_count, result.black_total_time_ns, result.white_move_count, result.white_total_time_ns)
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        let mapped = match result.outcome.winner() {
            Some(color) => {
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw(result.outcome)
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / f64::from(moves) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    mut state: GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<Move>), ChessError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = rng.random_range(low..=high);

    let mut opening_moves = Vec::with_capacity(usize::from(target_plies));
    for _ in 0..target_plies {
        let moves = legal_moves(&state);
        let Some(&chosen) = moves.choose(&mut rng) else {
            break;
        };
        attempt_move(&mut state, chosen.from, chosen.to)?;
        opening_moves.push(chosen);
    }

    Ok((state, opening_moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn random_vs_alpha_beta_runs_to_completion() {
        let mut white = RandomEngine::seeded(3);
        let mut black = AlphaBetaEngine::new(1);
        let config = MatchConfig {
            max_plies: 40,
            opening_min_plies: 2,
            opening_max_plies: 6,
            ..MatchConfig::default()
        };
        let result = play_engine_match(&mut white, &mut black, 42, &config).expect("match should run");

        assert!((2..=6).contains(&result.opening_moves.len()));
        assert_eq!(
            result.played_moves.len() as u32,
            result.white_move_count + result.black_move_count
        );
        assert!(result.played_moves.len() <= 40);
        assert_eq!(
            result.final_state.ply(),
            result.opening_moves.len() + result.played_moves.len()
        );
    }

    #[test]
    fn same_seed_same_opening() {
        let config = MatchConfig {
            max_plies: 0,
            opening_min_plies: 4,
            opening_max_plies: 4,
            ..MatchConfig::default()
        };
        let first = play_engine_match(&mut RandomEngine::seeded(1), &mut RandomEngine::seeded(2), 9, &config)
            .expect("match");
        let second = play_engine_match(&mut RandomEngine::seeded(5), &mut RandomEngine::seeded(6), 9, &config)
            .expect("match");
        assert_eq!(first.opening_moves, second.opening_moves);
        assert_eq!(first.opening_moves.len(), 4);
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn mate_in_one_is_found_from_a_given_position() {
        let start = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen");
        let result = play_engine_match_from_state(
            &mut AlphaBetaEngine::new(2),
            &mut RandomEngine::seeded(0),
            start,
            &MatchConfig::default(),
        )
        .expect("match");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.played_moves.len(), 1);
        assert!(result.opening_moves.is_empty());
    }

    #[test]
    fn series_tallies_every_game() {
        let stats = play_engine_match_series(
            || Box::new(AlphaBetaEngine::with_scorer(1, Box::new(MaterialScorer))),
            || Box::new(RandomEngine::seeded(11)),
            &MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 16,
                    opening_min_plies: 2,
                    opening_max_plies: 4,
                    ..MatchConfig::default()
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_avg_move_time_ms() >= 0.0);
        assert!(stats.report().starts_with("games=3"));
    }
}
