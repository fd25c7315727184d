//! Game outcomes and turn control shared by every way of running a game.
//!
//! The plain `Game` loop and the timed wrapper both speak in these types:
//! a turn ends by passing the die, by deciding the game, or by being
//! interrupted by a `Deadline`.

pub mod engine;

pub use engine::{Deadline, GameResult, GameStatus, TurnOutcome, Victory};
