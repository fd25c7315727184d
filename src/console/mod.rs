//! Collaborators at the edge of the game: where human choices come from and
//! where messages go.
//!
//! - `InputSource`: raw text for a human's roll/hold choice
//! - `Reporter`: receives every `Event`
//!
//! `ConsoleInput` and `ConsoleReporter` talk to the terminal. `ScriptedInput`
//! and `RecordingReporter` stand in for them when a game is driven from code.

mod event;
mod scripted;

pub use event::Event;
pub use scripted::{RecordingReporter, ScriptedInput};

use dialoguer::Input;

use crate::core::{Player, PigError};

/// Prompt shown to human players.
pub const PROMPT: &str = "Roll (1) or Hold (2)?";

/// Source of human decisions.
///
/// Returns the raw answer; the game validates it.
pub trait InputSource {
    fn choose(&mut self, player: &Player) -> Result<String, PigError>;
}

/// Sink for player-facing messages.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Reads answers from the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn choose(&mut self, player: &Player) -> Result<String, PigError> {
        log::trace!("prompting {}", player.name());
        Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(|e| PigError::InputClosed(e.to_string()))
    }
}

/// Prints events to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: Event) {
        if event.is_heading() {
            println!();
        }
        println!("{event}");
    }
}
