//! Computer-vs-computer demo over a full game session.
//!
//! Run with:
//! `cargo run --release -- --games 2`
//! `RUST_LOG=debug CHESS_CORE_DEPTH=2 cargo run --release`

use std::thread;
use std::time::{Duration, Instant};

use chess_core::config::EngineConfig;
use chess_core::errors::ChessError;
use chess_core::game_state::chess_types::Color;
use chess_core::session::game_clock::format_clock;
use chess_core::session::game_session::GameSession;
use chess_core::session::player::Player;
use chrono::TimeDelta;
use log::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn games_from_args() -> u32 {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--games")
        .and_then(|i| args.get(i + 1))
        .and_then(|raw| match raw.parse() {
            Ok(games) => Some(games),
            Err(_) => {
                warn!("ignoring --games {raw:?}");
                None
            }
        })
        .unwrap_or(1)
}

/// Let the computer on move think while its clock runs.
fn play_one_move(session: &mut GameSession) -> Result<(), ChessError> {
    session.request_ai_move()?;
    let mut last_tick = Instant::now();
    loop {
        thread::sleep(POLL_INTERVAL);
        let elapsed = TimeDelta::from_std(last_tick.elapsed()).unwrap_or(TimeDelta::zero());
        last_tick = Instant::now();
        session.tick_clock(elapsed);

        if session.poll_ai_move()?.is_some() || !session.is_searching() {
            return Ok(());
        }
        if session.is_over() {
            // Flag fell mid-search; collect and discard the late reply.
            session.wait_ai_move()?;
            return Ok(());
        }
    }
}

fn main() -> Result<(), ChessError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::from_env();
    let mut session = GameSession::new(Player::computer(), Player::computer(), config);

    for game in 0..games_from_args() {
        if game > 0 {
            session.new_game()?;
        }
        while !session.is_over() {
            play_one_move(&mut session)?;
        }

        println!(
            "game {}: {:?} after {} plies in {}s, clocks {} / {}, fen {}",
            game + 1,
            session.outcome(),
            session.state().ply(),
            session.duration().num_seconds(),
            format_clock(session.clock().remaining(Color::White)),
            format_clock(session.clock().remaining(Color::Black)),
            session.state().get_fen()
        );
    }
    Ok(())
}
