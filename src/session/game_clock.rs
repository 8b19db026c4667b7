//! Per-side countdown clock.

use chrono::TimeDelta;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    initial: TimeDelta,
    remaining: [TimeDelta; 2],
}

impl GameClock {
    pub fn new(per_player: TimeDelta) -> Self {
        Self {
            initial: per_player,
            remaining: [per_player; 2],
        }
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> TimeDelta {
        self.remaining[color.index()]
    }

    /// Charge `elapsed` to `color`. Returns true once that side has run out.
    pub fn tick(&mut self, color: Color, elapsed: TimeDelta) -> bool {
        let slot = &mut self.remaining[color.index()];
        *slot = (*slot - elapsed).max(TimeDelta::zero());
        self.is_flagged(color)
    }

    #[inline]
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining[color.index()] <= TimeDelta::zero()
    }

    pub fn reset(&mut self) {
        self.remaining = [self.initial; 2];
    }
}

/// Render a clock reading as `MM:SS`; minutes are not capped at 59.
pub fn format_clock(remaining: TimeDelta) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticking_only_charges_one_side() {
        let mut clock = GameClock::new(TimeDelta::minutes(10));
        assert!(!clock.tick(Color::White, TimeDelta::seconds(75)));
        assert_eq!(clock.remaining(Color::White), TimeDelta::seconds(525));
        assert_eq!(clock.remaining(Color::Black), TimeDelta::minutes(10));
    }

    #[test]
    fn running_out_flags_and_clamps_at_zero() {
        let mut clock = GameClock::new(TimeDelta::seconds(5));
        assert!(clock.tick(Color::Black, TimeDelta::seconds(9)));
        assert_eq!(clock.remaining(Color::Black), TimeDelta::zero());
        assert!(clock.is_flagged(Color::Black));

        clock.reset();
        assert!(!clock.is_flagged(Color::Black));
        assert_eq!(clock.remaining(Color::Black), TimeDelta::seconds(5));
    }

    #[test]
    fn format_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(TimeDelta::minutes(10)), "10:00");
        assert_eq!(format_clock(TimeDelta::seconds(65)), "01:05");
        assert_eq!(format_clock(TimeDelta::seconds(-3)), "00:00");
        assert_eq!(format_clock(TimeDelta::minutes(125)), "125:00");
    }
}
