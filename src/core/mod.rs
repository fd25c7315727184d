//! Core types: dice, players, decisions, configuration and errors.

pub mod action;
pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod policy;
pub mod rng;

pub use action::{ActionRecord, Decision};
pub use config::{GameConfig, TIME_LIMIT, WIN_SCORE};
pub use die::{Die, LoadedDie, Roller, DEFAULT_SIDES};
pub use error::PigError;
pub use player::{Controller, Player, PlayerId, PlayerKind, PlayerPair, RollOutcome};
pub use policy::{DecisionPolicy, ThresholdPolicy};
pub use rng::GameRng;
