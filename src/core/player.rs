//! Players, seats and per-seat storage.
//!
//! ## PlayerId
//!
//! The two seats at the table. The game tracks whose turn it is by seat,
//! never by comparing player objects.
//!
//! ## PlayerPair
//!
//! One value per seat, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Score bookkeeping plus a `Controller` saying who makes the decisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::action::Decision;
use super::die::Roller;
use super::error::PigError;
use super::policy::{DecisionPolicy, ThresholdPolicy};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Both seats in play order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::One, PlayerId::Two].into_iter()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// One value per seat.
///
/// ```
/// use pig_dice::core::{PlayerId, PlayerPair};
///
/// let mut scores = PlayerPair::new(|_| 0u32);
/// scores[PlayerId::Two] = 15;
/// assert_eq!(scores[PlayerId::One], 0);
/// assert_eq!(scores[PlayerId::Two], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    one: T,
    two: T,
}

impl<T> PlayerPair<T> {
    /// Build both entries from a factory receiving each seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            one: factory(PlayerId::One),
            two: factory(PlayerId::Two),
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }

    /// Map each entry to a new value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            one: f(&self.one),
            two: f(&self.two),
        }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}

/// Which kind of player sits in a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(PigError::InvalidPlayerType(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

/// Who makes a player's decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Decisions come from the input source.
    Human,
    /// Decisions come from a policy.
    Computer(ThresholdPolicy),
}

/// Result of a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Face added to the turn total; the turn goes on.
    Scored(u32),
    /// A 1 was rolled; the turn total is lost and the turn is over.
    Pigged,
}

impl RollOutcome {
    /// Whether the same player keeps rolling.
    #[must_use]
    pub fn continues(self) -> bool {
        matches!(self, RollOutcome::Scored(_))
    }

    /// The face that came up.
    #[must_use]
    pub fn face(self) -> u32 {
        match self {
            RollOutcome::Scored(face) => face,
            RollOutcome::Pigged => 1,
        }
    }
}

/// A player's score state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
    turn_total: u32,
    is_turn: bool,
    controller: Controller,
}

impl Player {
    /// Human-controlled player.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::with_controller(name, Controller::Human)
    }

    /// Computer player using the default threshold policy.
    #[must_use]
    pub fn computer(name: impl Into<String>) -> Self {
        Self::with_controller(name, Controller::Computer(ThresholdPolicy::default()))
    }

    #[must_use]
    pub fn with_controller(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            score: 0,
            turn_total: 0,
            is_turn: false,
            controller,
        }
    }

    /// Create a player for `seat` from a kind name (`"human"` or `"computer"`).
    pub fn create(kind: &str, seat: PlayerId) -> Result<Self, PigError> {
        Ok(Self::from_kind(kind.parse()?, seat))
    }

    /// Create a player for `seat`, named after the seat.
    #[must_use]
    pub fn from_kind(kind: PlayerKind, seat: PlayerId) -> Self {
        match kind {
            PlayerKind::Human => Self::human(seat.to_string()),
            PlayerKind::Computer => Self::computer(seat.to_string()),
        }
    }

    /// Swap in a different policy. Humans are unaffected.
    #[must_use]
    pub fn with_policy(mut self, policy: ThresholdPolicy) -> Self {
        if let Controller::Computer(_) = self.controller {
            self.controller = Controller::Computer(policy);
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    #[must_use]
    pub fn is_turn(&self) -> bool {
        self.is_turn
    }

    #[must_use]
    pub fn controller(&self) -> Controller {
        self.controller
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        matches!(self.controller, Controller::Computer(_))
    }

    /// Make this player the active one.
    pub fn begin_turn(&mut self) {
        self.is_turn = true;
    }

    /// Roll once. A 1 forfeits the turn total and ends the turn.
    pub fn roll_die(&mut self, die: &mut dyn Roller) -> RollOutcome {
        let face = die.roll();
        if face == 1 {
            self.reset_turn();
            return RollOutcome::Pigged;
        }
        self.turn_total += face;
        RollOutcome::Scored(face)
    }

    /// Bank the turn total and end the turn. Returns the amount banked.
    pub fn hold(&mut self) -> u32 {
        let banked = self.turn_total;
        self.score += banked;
        self.reset_turn();
        banked
    }

    /// Clear the turn total and end the turn.
    pub fn reset_turn(&mut self) {
        self.turn_total = 0;
        self.is_turn = false;
    }

    /// The computer's choice, or `None` for a human.
    #[must_use]
    pub fn decide(&self) -> Option<Decision> {
        match self.controller {
            Controller::Human => None,
            Controller::Computer(policy) => Some(policy.decide(self.score, self.turn_total)),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::die::LoadedDie;

    #[test]
    fn test_other_seat() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_seat_names() {
        assert_eq!(PlayerId::One.to_string(), "Player 1");
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_player_kind_parse() {
        assert_eq!("human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert_eq!("Computer".parse::<PlayerKind>(), Ok(PlayerKind::Computer));
        assert_eq!(
            "robot".parse::<PlayerKind>(),
            Err(PigError::InvalidPlayerType("robot".to_string()))
        );
    }

    #[test]
    fn test_create_rejects_unknown_kind() {
        assert!(Player::create("alien", PlayerId::One).is_err());

        let p = Player::create("computer", PlayerId::Two).unwrap();
        assert!(p.is_computer());
        assert_eq!(p.name(), "Player 2");
    }

    #[test]
    fn test_roll_accumulates() {
        let mut p = Player::human("A");
        p.begin_turn();
        let mut die = LoadedDie::new([4, 6]);

        assert_eq!(p.roll_die(&mut die), RollOutcome::Scored(4));
        assert_eq!(p.roll_die(&mut die), RollOutcome::Scored(6));
        assert_eq!(p.turn_total(), 10);
        assert!(p.is_turn());
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn test_rolling_one_forfeits() {
        let mut p = Player::human("A");
        p.begin_turn();
        let mut die = LoadedDie::new([5, 5, 1]);

        assert!(p.roll_die(&mut die).continues());
        assert!(p.roll_die(&mut die).continues());
        let outcome = p.roll_die(&mut die);

        assert_eq!(outcome, RollOutcome::Pigged);
        assert!(!outcome.continues());
        assert_eq!(outcome.face(), 1);
        assert_eq!(p.turn_total(), 0);
        assert!(!p.is_turn());
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn test_hold_banks_turn_total() {
        let mut p = Player::human("A");
        p.set_score(30);
        p.begin_turn();
        let mut die = LoadedDie::new([6, 3]);
        p.roll_die(&mut die);
        p.roll_die(&mut die);

        assert_eq!(p.hold(), 9);
        assert_eq!(p.score(), 39);
        assert_eq!(p.turn_total(), 0);
        assert!(!p.is_turn());
    }

    #[test]
    fn test_reset_turn_idempotent() {
        let mut p = Player::human("A");
        p.begin_turn();
        p.roll_die(&mut LoadedDie::new([5]));
        p.reset_turn();
        let once = p.clone();
        p.reset_turn();
        assert_eq!(p, once);
        assert_eq!(p.turn_total(), 0);
        assert!(!p.is_turn());
    }

    #[test]
    fn test_decide_only_for_computer() {
        let human = Player::human("H");
        assert_eq!(human.decide(), None);

        let mut cpu = Player::computer("C");
        cpu.set_score(80);
        cpu.begin_turn();
        let mut die = LoadedDie::new([6, 6, 6, 2]);
        for _ in 0..3 {
            cpu.roll_die(&mut die);
        }
        assert_eq!(cpu.turn_total(), 18);
        assert_eq!(cpu.decide(), Some(Decision::Roll));
        cpu.roll_die(&mut die);
        assert_eq!(cpu.decide(), Some(Decision::Hold));
    }

    #[test]
    fn test_player_pair_index() {
        let mut pair = PlayerPair::new(|id| id.to_string());
        assert_eq!(pair[PlayerId::One], "Player 1");
        pair[PlayerId::Two].push('!');
        assert_eq!(pair[PlayerId::Two], "Player 2!");

        let lens = pair.map(|s| s.len());
        assert_eq!(lens[PlayerId::Two], 9);
        assert_eq!(pair.iter().count(), 2);
    }
}
