//! Game configuration.
//!
//! `GameConfig` collects everything decided before the first roll: who sits
//! in each seat, whether the clock runs, and the die seed. The command line
//! only exposes the player kinds, `--timed` and `--seed`; the other fields
//! keep their defaults outside of tests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::die::DEFAULT_SIDES;
use super::player::{PlayerId, PlayerKind};

/// Score at or above which a player wins outright.
pub const WIN_SCORE: u32 = 100;

/// Wall-clock budget for a timed game.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Kind of player in the first seat (default: human).
    pub player1: PlayerKind,

    /// Kind of player in the second seat (default: human).
    pub player2: PlayerKind,

    /// Whether the time limit applies.
    pub timed: bool,

    /// Die seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Faces on the die (default: 6).
    pub die_sides: u32,

    /// Winning score (default: 100).
    pub win_score: u32,

    /// Time budget for timed games (default: 60 seconds).
    pub time_limit: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1: PlayerKind::Human,
            player2: PlayerKind::Human,
            timed: false,
            seed: None,
            die_sides: DEFAULT_SIDES,
            win_score: WIN_SCORE,
            time_limit: TIME_LIMIT,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both player kinds.
    pub fn with_players(mut self, player1: PlayerKind, player2: PlayerKind) -> Self {
        self.player1 = player1;
        self.player2 = player2;
        self
    }

    /// Enable or disable the time limit.
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Use a fixed die seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Override the winning score.
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    /// Kind of player in a seat.
    #[must_use]
    pub fn kind(&self, seat: PlayerId) -> PlayerKind {
        match seat {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player1, PlayerKind::Human);
        assert_eq!(config.player2, PlayerKind::Human);
        assert!(!config.timed);
        assert_eq!(config.die_sides, 6);
        assert_eq!(config.win_score, 100);
        assert_eq!(config.time_limit, Duration::from_secs(60));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new()
            .with_players(PlayerKind::Computer, PlayerKind::Human)
            .with_timed(true)
            .with_seed(9);

        assert_eq!(config.kind(PlayerId::One), PlayerKind::Computer);
        assert_eq!(config.kind(PlayerId::Two), PlayerKind::Human);
        assert!(config.timed);
        assert_eq!(config.seed, Some(9));
    }
}
