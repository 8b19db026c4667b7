/// A participant and their running record across games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub age: u32,
    pub score: u32,
    pub games_played: u32,
    pub is_computer: bool,
}

impl Player {
    pub fn human(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            score: 0,
            games_played: 0,
            is_computer: false,
        }
    }

    pub fn computer() -> Self {
        Self {
            name: "Computer".to_owned(),
            age: 0,
            score: 0,
            games_played: 0,
            is_computer: true,
        }
    }

    /// Record a finished game; `won` adds one point.
    pub fn record_game(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.score += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn record_game_counts_games_and_wins() {
        let mut player = Player::human("Ada", 36);
        player.record_game(true);
        player.record_game(false);
        assert_eq!((player.score, player.games_played), (1, 2));
        assert!(!player.is_computer);
        assert!(Player::computer().is_computer);
    }
}
