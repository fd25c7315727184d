//! Error types.

use std::fmt;

/// Errors surfaced by game construction and play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PigError {
    /// A human typed something other than a roll or hold choice.
    /// Recovered inside the turn loop by prompting again.
    InvalidInput(String),

    /// A player variant other than `human` or `computer` was requested.
    InvalidPlayerType(String),

    /// The human input source cannot produce any more choices.
    InputClosed(String),
}

impl fmt::Display for PigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PigError::InvalidInput(raw) => write!(f, "invalid input {raw:?}: expected 1 or 2"),
            PigError::InvalidPlayerType(kind) => {
                write!(f, "invalid player type {kind:?}: expected human or computer")
            }
            PigError::InputClosed(reason) => write!(f, "input closed: {reason}"),
        }
    }
}

impl std::error::Error for PigError {}
