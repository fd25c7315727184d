//! Decision policies for computer-controlled players.
//!
//! A policy is a pure function of the player's banked score and current turn
//! total. `ThresholdPolicy` is the only one the game ships with.

use serde::{Deserialize, Serialize};

use super::action::Decision;

/// Policy for choosing between rolling and holding.
pub trait DecisionPolicy {
    /// Decide the next move given the banked score and the running turn total.
    fn decide(&self, score: u32, turn_total: u32) -> Decision;
}

/// Hold once the turn total reaches a threshold.
///
/// The threshold is `min(cap, target - score)`, so it shrinks as the player
/// nears the win line and never asks for more than is needed to win.
///
/// ```
/// use pig_dice::core::{Decision, DecisionPolicy, ThresholdPolicy};
///
/// let policy = ThresholdPolicy::default();
/// assert_eq!(policy.decide(80, 19), Decision::Roll);
/// assert_eq!(policy.decide(80, 20), Decision::Hold);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Largest turn total worth risking (default: 25).
    pub cap: u32,

    /// Score that wins the game (default: 100).
    pub target: u32,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            cap: 25,
            target: 100,
        }
    }
}

impl ThresholdPolicy {
    /// Policy aiming at a different win score.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Turn total at which this policy holds for a given score.
    #[must_use]
    pub fn hold_threshold(&self, score: u32) -> u32 {
        self.cap.min(self.target.saturating_sub(score))
    }
}

impl DecisionPolicy for ThresholdPolicy {
    fn decide(&self, score: u32, turn_total: u32) -> Decision {
        match turn_total >= self.hold_threshold(score) {
            true => Decision::Hold,
            false => Decision::Roll,
        }
    }
}
