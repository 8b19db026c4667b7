//! Runtime settings for a game session.
//!
//! Defaults match a casual game: three-ply search and ten minutes per side.
//! `from_env` overrides them from `CHESS_CORE_DEPTH` and
//! `CHESS_CORE_MINUTES`; unparsable values are ignored with a warning.

use chrono::TimeDelta;
use log::warn;

pub const DEPTH_ENV: &str = "CHESS_CORE_DEPTH";
pub const MINUTES_ENV: &str = "CHESS_CORE_MINUTES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched by the computer player. Never below 1.
    pub search_depth: u8,
    pub time_per_player: TimeDelta,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            time_per_player: TimeDelta::minutes(10),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEPTH_ENV) {
            match raw.trim().parse::<u8>() {
                Ok(depth) => config.search_depth = depth.max(1),
                Err(_) => warn!("ignoring {DEPTH_ENV}={raw:?}: not a depth"),
            }
        }

        if let Some(raw) = lookup(MINUTES_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(minutes) if minutes > 0 => config.time_per_player = TimeDelta::minutes(i64::from(minutes)),
                _ => warn!("ignoring {MINUTES_ENV}={raw:?}: not a positive number of minutes"),
            }
        }

        config
    }
}
