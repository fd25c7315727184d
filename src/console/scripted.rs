//! In-memory collaborators for driving a game from code.

use std::collections::VecDeque;

use super::{Event, InputSource, Reporter};
use crate::core::{Player, PigError};

/// Replays a fixed list of human answers, then reports the input as closed.
///
/// ```
/// use pig_dice::console::{InputSource, ScriptedInput};
/// use pig_dice::core::Player;
///
/// let mut input = ScriptedInput::new(["1", "2"]);
/// let p = Player::human("A");
/// assert_eq!(input.choose(&p).unwrap(), "1");
/// assert_eq!(input.choose(&p).unwrap(), "2");
/// assert!(input.choose(&p).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn choose(&mut self, _player: &Player) -> Result<String, PigError> {
        self.answers
            .pop_front()
            .ok_or_else(|| PigError::InputClosed("script exhausted".to_string()))
    }
}

/// Keeps every event it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events matching a predicate.
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// The last event received.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Event) {
        self.events.push(event);
    }
}
