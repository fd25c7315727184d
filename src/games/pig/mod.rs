//! Pig, for two players.
//!
//! - Players alternate turns; a turn is any number of rolls
//! - Each roll adds its face to the turn total, except a 1, which wipes the
//!   turn total and ends the turn
//! - Holding banks the turn total and passes the die
//! - First to 100 wins; in a timed game, the leader when the minute is up wins
//!
//! `Game` runs the turns, `TimedGameProxy` adds the clock.

mod game;
mod timed;

pub use game::{Game, GameBuilder, GameSummary};
pub use timed::{Clock, ManualClock, Stopwatch, SystemClock, TimedGameProxy};
