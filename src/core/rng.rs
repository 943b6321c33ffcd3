//! Random number sources.
//!
//! The engine never reaches for a global RNG. Every draw goes through the
//! `RandomSource` trait, which is passed down from the game facade into
//! the turn engine, the activation engine and the effect resolver.
//!
//! - `GameRng`: seeded ChaCha8 source; same seed, same game.
//! - `ScriptedRandom`: replays scripted dice, choices and coin flips,
//!   falling back to a seeded `GameRng` once a script runs dry.
//!
//! ```
//! use machi_koro::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Injectable randomness capability.
pub trait RandomSource {
    /// Roll one six-sided die, returning 1..=6.
    fn roll_die(&mut self) -> u8;

    /// Pick an index in `0..len`. `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Return true with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;
}

/// Choose a random element from a slice.
///
/// Returns `None` for an empty slice without consuming randomness.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_index(items.len()))
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Scripted randomness for tests.
///
/// Each stream is consumed front to back. Scripted indices are reduced
/// modulo the requested length so a script stays valid when the number
/// of options changes.
///
/// ```
/// use machi_koro::core::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new(0).with_dice([6, 2]).with_flips([true]);
/// assert_eq!(rng.roll_die(), 6);
/// assert_eq!(rng.roll_die(), 2);
/// assert!(rng.gen_bool(0.0));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    dice: VecDeque<u8>,
    indices: VecDeque<usize>,
    flips: VecDeque<bool>,
    fallback: GameRng,
}

impl ScriptedRandom {
    /// Create an empty script; every draw falls back to `GameRng::new(seed)`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            dice: VecDeque::new(),
            indices: VecDeque::new(),
            flips: VecDeque::new(),
            fallback: GameRng::new(seed),
        }
    }

    /// Queue die faces (1..=6).
    #[must_use]
    pub fn with_dice(mut self, dice: impl IntoIterator<Item = u8>) -> Self {
        self.dice.extend(dice);
        self
    }

    /// Queue choice indices.
    #[must_use]
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue coin-flip outcomes.
    #[must_use]
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    /// Scripted draws not yet consumed, as (dice, indices, flips).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize, usize) {
        (self.dice.len(), self.indices.len(), self.flips.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_die(&mut self) -> u8 {
        match self.dice.pop_front() {
            Some(face) => face.clamp(1, 6),
            None => self.fallback.roll_die(),
        }
    }

    fn gen_index(&mut self, len: usize) -> usize {
        match self.indices.pop_front() {
            Some(index) => index % len,
            None => self.fallback.gen_index(len),
        }
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        match self.flips.pop_front() {
            Some(flip) => flip,
            None => self.fallback.gen_bool(probability),
        }
    }
}
