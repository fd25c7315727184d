//! Dice.
//!
//! `Roller` is the seam the game rolls through. `Die` is the real thing;
//! `LoadedDie` replays a fixed list of faces so turns can be scripted.

use super::rng::GameRng;

/// Default number of faces.
pub const DEFAULT_SIDES: u32 = 6;

/// Anything that produces die faces.
pub trait Roller {
    /// Roll once, returning a face in `[1, sides]`.
    fn roll(&mut self) -> u32;
}

/// A fair die with a fixed number of sides.
#[derive(Clone, Debug)]
pub struct Die {
    sides: u32,
    rng: GameRng,
}

impl Die {
    /// Create a die with `sides` faces drawing from a seeded stream.
    ///
    /// Panics if `sides` is zero.
    #[must_use]
    pub fn new(sides: u32, seed: u64) -> Self {
        assert!(sides >= 1, "A die needs at least one side");
        Self {
            sides,
            rng: GameRng::new(seed),
        }
    }

    /// Six-sided die with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(DEFAULT_SIDES, seed)
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Seed of the underlying stream, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            rng: GameRng::from_entropy(),
        }
    }
}

impl Roller for Die {
    fn roll(&mut self) -> u32 {
        self.rng.roll(self.sides)
    }
}

/// A die that cycles through a fixed sequence of faces.
///
/// ```
/// use pig_dice::core::{LoadedDie, Roller};
///
/// let mut die = LoadedDie::new([3, 1]);
/// assert_eq!(die.roll(), 3);
/// assert_eq!(die.roll(), 1);
/// assert_eq!(die.roll(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDie {
    faces: Vec<u32>,
    next: usize,
}

impl LoadedDie {
    /// Panics if `faces` is empty.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "A loaded die needs at least one face");
        Self { faces, next: 0 }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.next
    }
}

impl Roller for LoadedDie {
    fn roll(&mut self) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}
