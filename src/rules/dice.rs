//! Dice rolls.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// One or two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: Option<u8>,
}

impl DiceRoll {
    /// Roll `count` dice. Anything other than 2 rolls a single die.
    pub fn roll(rng: &mut dyn RandomSource, count: u8) -> Self {
        let first = rng.roll_die();
        let second = (count == 2).then(|| rng.roll_die());
        Self { first, second }
    }

    #[must_use]
    pub fn single(first: u8) -> Self {
        Self { first, second: None }
    }

    #[must_use]
    pub fn pair(first: u8, second: u8) -> Self {
        Self { first, second: Some(second) }
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.first + self.second.unwrap_or(0)
    }

    /// Two dice showing the same face.
    #[must_use]
    pub fn is_doubles(&self) -> bool {
        self.second == Some(self.first)
    }

    #[must_use]
    pub fn dice_count(&self) -> u8 {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.second {
            Some(second) => write!(f, "{}+{}={}", self.first, second, self.total()),
            None => write!(f, "{}", self.first),
        }
    }
}
