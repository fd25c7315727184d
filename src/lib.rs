//! # pig-dice
//!
//! The dice game Pig for two players, human or computer, with an optional
//! one-minute time limit.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: Turns, scores and win checks never touch the
//!    terminal. Randomness, human input, output and time all come in through
//!    traits (`Roller`, `InputSource`, `Reporter`, `Clock`).
//!
//! 2. **Seats, not references**: Whose turn it is is a `PlayerId`, and
//!    computer players are a `Controller` variant rather than a subtype.
//!
//! 3. **Cooperative preemption**: A timed game polls its `Deadline` before
//!    every decision. There is no other interruption point.
//!
//! ## Modules
//!
//! - `core`: Dice, RNG, players, decision policy, configuration, errors
//! - `rules`: Game results, turn outcomes, the deadline seam
//! - `console`: Input and output collaborators
//! - `games`: The Pig game loop and its timed wrapper

pub mod console;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Controller, Decision, DecisionPolicy, Die, GameConfig, GameRng, LoadedDie,
    PigError, Player, PlayerId, PlayerKind, PlayerPair, RollOutcome, Roller, ThresholdPolicy,
};

pub use crate::rules::{Deadline, GameResult, GameStatus, TurnOutcome, Victory};

pub use crate::console::{
    ConsoleInput, ConsoleReporter, Event, InputSource, RecordingReporter, Reporter, ScriptedInput,
};

pub use crate::games::pig::{
    Clock, Game, GameBuilder, GameSummary, ManualClock, Stopwatch, SystemClock, TimedGameProxy,
};
