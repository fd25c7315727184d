//! Turn decisions and the action history.
//!
//! A player's turn is a string of `Decision`s. Each completed one is logged
//! as an `ActionRecord` for replay and for the end-of-game summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::PigError;
use super::player::PlayerId;

/// What the active player does next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the turn total and pass the die.
    Hold,
}

impl Decision {
    /// Parse a human's console answer.
    ///
    /// `"1"` rolls and `"2"` holds; surrounding whitespace is ignored.
    ///
    /// ```
    /// use pig_dice::core::Decision;
    ///
    /// assert_eq!(Decision::from_input(" 1\n").unwrap(), Decision::Roll);
    /// assert_eq!(Decision::from_input("2").unwrap(), Decision::Hold);
    /// assert!(Decision::from_input("roll").is_err());
    /// ```
    pub fn from_input(raw: &str) -> Result<Self, PigError> {
        match raw.trim().to_lowercase().as_str() {
            "1" => Ok(Decision::Roll),
            "2" => Ok(Decision::Hold),
            _ => Err(PigError::InvalidInput(raw.to_string())),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Roll => write!(f, "Roll"),
            Decision::Hold => write!(f, "Hold"),
        }
    }
}

/// A completed decision with what came of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The decision taken.
    pub decision: Decision,

    /// Face rolled, for `Roll`. `None` for `Hold`.
    pub roll: Option<u32>,

    /// Turn number (1-based) the action belongs to.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, decision: Decision, roll: Option<u32>, turn: u32) -> Self {
        Self {
            player,
            decision,
            roll,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_rejects_everything_else() {
        for raw in ["3", "", "roll", "hold", "12", "0"] {
            assert_eq!(
                Decision::from_input(raw),
                Err(PigError::InvalidInput(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Decision::Roll.to_string(), "Roll");
        assert_eq!(Decision::Hold.to_string(), "Hold");
    }
}
