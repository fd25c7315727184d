//! Time-limited play.
//!
//! `TimedGameProxy` wraps a `Game` and hands it a `Stopwatch` as the turn
//! deadline. When the budget runs out mid-turn the unbanked turn total is
//! dropped and the game goes to whoever leads on points.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::console::{Event, InputSource, Reporter};
use crate::core::{PigError, Roller};
use crate::rules::{Deadline, GameResult, TurnOutcome};

use super::game::Game;

/// Monotonic time source.
pub trait Clock {
    /// Time since some fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and advance the
/// clock a proxy owns. With a non-zero `step`, every reading also advances
/// time by `step`.
///
/// ```
/// use pig_dice::games::pig::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_secs(5));
/// assert_eq!(clock.now(), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
    step: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that advances by `step` after every reading.
    pub fn stepping(step: Duration) -> Self {
        Self {
            now: Rc::default(),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Elapsed-time tracker with a fixed budget.
#[derive(Clone, Debug)]
pub struct Stopwatch<C> {
    clock: C,
    started: Option<Duration>,
    limit: Duration,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C, limit: Duration) -> Self {
        Self {
            clock,
            started: None,
            limit,
        }
    }

    /// Record the start time. Later calls restart the watch.
    pub fn start(&mut self) {
        self.started = Some(self.clock.now());
    }

    /// Time since `start`, zero if never started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.clock.now().saturating_sub(started),
            None => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<C: Clock> Deadline for Stopwatch<C> {
    /// Strictly over budget; a watch that never started never expires.
    fn expired(&self) -> bool {
        self.started.is_some() && self.elapsed() > self.limit
    }
}

/// A game with an optional time budget.
pub struct TimedGameProxy<D, I, R, C = SystemClock> {
    game: Game<D, I, R>,
    timed: bool,
    stopwatch: Stopwatch<C>,
}

impl<D: Roller, I: InputSource, R: Reporter, C: Clock> TimedGameProxy<D, I, R, C> {
    pub fn new(game: Game<D, I, R>, timed: bool, clock: C, limit: Duration) -> Self {
        Self {
            game,
            timed,
            stopwatch: Stopwatch::new(clock, limit),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game<D, I, R> {
        &self.game
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.timed
    }

    #[must_use]
    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    /// Start the clock and play turns until the game is decided or, for a
    /// timed game, the budget runs out.
    pub fn start_game(&mut self) -> Result<GameResult, PigError> {
        self.stopwatch.start();
        log::info!(
            "starting {} game",
            if self.timed { "timed" } else { "untimed" }
        );
        self.game.display_current_player();

        loop {
            if let Some(result) = self.game.result() {
                return Ok(result);
            }
            if self.check_time() {
                continue;
            }

            let deadline: Option<&dyn Deadline> = match self.timed {
                true => Some(&self.stopwatch),
                false => None,
            };
            match self.game.play_turn(deadline)? {
                TurnOutcome::GameOver(result) => return Ok(result),
                TurnOutcome::Passed(_) => {}
                TurnOutcome::Interrupted => return Ok(self.expire()),
            }
        }
    }

    /// Resolve the game if the budget is spent. Returns whether it was.
    ///
    /// Untimed games and games within budget are left untouched.
    pub fn check_time(&mut self) -> bool {
        if self.timed && self.stopwatch.expired() {
            self.expire();
            return true;
        }
        false
    }

    fn expire(&mut self) -> GameResult {
        log::info!("time limit of {:?} reached", self.stopwatch.limit());
        self.game.display_scores();
        let result = self.game.check_winner();
        self.display_time_taken();
        result
    }

    /// Report the time since the game started.
    pub fn display_time_taken(&mut self) {
        let elapsed = self.stopwatch.elapsed();
        self.game.report(Event::TimeTaken(elapsed));
    }
}
