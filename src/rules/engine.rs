//! Game outcomes and the turn-interruption seam.
//!
//! - `GameResult`: how a finished game came out
//! - `GameStatus`: whether the game is still being played
//! - `TurnOutcome`: why a call to `play_turn` returned
//! - `Deadline`: polled before every decision so a turn can be cut short

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victory {
    /// Reached the winning score.
    Reached,
    /// Led on points when time ran out.
    OutOfTime,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner { player: PlayerId, by: Victory },
    /// Equal scores when time ran out.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner { player: p, .. } => *p == player,
            GameResult::Tie => false,
        }
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner { player, .. } => Some(*player),
            GameResult::Tie => None,
        }
    }
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The given seat is rolling.
    TurnInProgress(PlayerId),
    /// Somebody won, or the clock ran out.
    GameOver(GameResult),
}

/// Why `play_turn` handed control back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn ended and the die passed to this seat.
    Passed(PlayerId),
    /// The game was decided.
    GameOver(GameResult),
    /// The deadline expired before the next decision. Nothing was resolved.
    Interrupted,
}

/// A budget checked at the top of each decision inside a turn.
pub trait Deadline {
    /// Whether play must stop now.
    fn expired(&self) -> bool;
}
