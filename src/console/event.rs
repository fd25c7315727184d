//! Player-facing messages.
//!
//! The game never formats text itself. It emits `Event`s and a `Reporter`
//! decides how to show them; `Display` gives the console wording.

use std::fmt;
use std::time::Duration;

use crate::core::Decision;
use crate::rules::Victory;

/// Something the players should be told about.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A player is up.
    TurnStarted { name: String },
    /// A computer player picked a move.
    Chose { name: String, decision: Decision },
    /// A roll other than 1.
    Rolled {
        name: String,
        face: u32,
        turn_total: u32,
        score: u32,
    },
    /// A 1 was rolled and the turn total lost.
    Pigged { name: String },
    /// Turn total banked.
    Held { name: String, score: u32 },
    /// A human typed something other than 1 or 2.
    InvalidInput { raw: String },
    /// Both scores, in seat order.
    Scores {
        player1: (String, u32),
        player2: (String, u32),
    },
    /// The game has a winner.
    Winner { name: String, by: Victory },
    /// Time ran out with the scores level.
    Tie,
    /// Wall-clock time since the game started.
    TimeTaken(Duration),
}

impl Event {
    /// Events that open a new block of console output.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Event::TurnStarted { .. }
                | Event::Scores { .. }
                | Event::Winner { .. }
                | Event::Tie
                | Event::TimeTaken(_)
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TurnStarted { name } => write!(f, "{name}'s turn:"),
            Event::Chose { name, decision } => write!(f, "{name} chooses to {decision}"),
            Event::Rolled {
                name,
                face,
                turn_total,
                score,
            } => write!(
                f,
                "{name} rolled a {face}. Turn Total: {turn_total}, Total Score: {score}"
            ),
            Event::Pigged { name } => write!(f, "Turn Over! {name} rolled a 1."),
            Event::Held { name, score } => write!(f, "{name} holds. Total Score: {score}"),
            Event::InvalidInput { .. } => {
                write!(f, "Invalid input, Please Type '1' for Roll or '2' for Hold.")
            }
            Event::Scores { player1, player2 } => write!(
                f,
                "Scores - {}: {}, {}: {}",
                player1.0, player1.1, player2.0, player2.1
            ),
            Event::Winner {
                name,
                by: Victory::Reached,
            } => write!(f, "Congratulations to the winner, {name}."),
            Event::Winner {
                name,
                by: Victory::OutOfTime,
            } => write!(f, "You ran out of time! {name} wins!"),
            Event::Tie => write!(f, "Time's up! There is a tie!"),
            Event::TimeTaken(elapsed) => {
                write!(f, "Time Taken: {:.2} seconds", elapsed.as_secs_f64())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_taken_two_decimals() {
        let event = Event::TimeTaken(Duration::from_millis(61_237));
        assert_eq!(event.to_string(), "Time Taken: 61.24 seconds");
    }

    #[test]
    fn test_winner_wording() {
        let reached = Event::Winner {
            name: "Player 1".to_string(),
            by: Victory::Reached,
        };
        assert_eq!(reached.to_string(), "Congratulations to the winner, Player 1.");

        let timed = Event::Winner {
            name: "Player 2".to_string(),
            by: Victory::OutOfTime,
        };
        assert_eq!(timed.to_string(), "You ran out of time! Player 2 wins!");
    }

    #[test]
    fn test_scores_wording() {
        let event = Event::Scores {
            player1: ("Player 1".to_string(), 42),
            player2: ("Player 2".to_string(), 7),
        };
        assert_eq!(event.to_string(), "Scores - Player 1: 42, Player 2: 7");
        assert!(event.is_heading());
    }
}
