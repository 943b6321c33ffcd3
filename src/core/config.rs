//! Game configuration.
//!
//! A game is configured at startup by providing:
//! - the number of players
//! - the starting establishments every player receives
//! - the starting major establishments every player owns
//! - starting coins, ordinary card stock and a turn limit
//!
//! `GameConfig` deserializes with defaults for every missing field, so an
//! external loader only has to supply what it wants to change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::state::EstablishmentCount;
use crate::cards::Card;

/// Coins each player starts with.
pub const DEFAULT_STARTING_COINS: u32 = 3;

/// Copies of each ordinary establishment in the market.
pub const DEFAULT_ESTABLISHMENT_STOCK: u32 = 6;

/// Turn budget for `play_game` before it gives up.
pub const DEFAULT_MAX_TURNS: u32 = 50_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    pub starting_coins: u32,

    /// Regular establishments each player starts with.
    pub starting_establishments: BTreeMap<Card, EstablishmentCount>,

    /// Major establishments each player starts with.
    pub starting_major_establishments: Vec<Card>,

    /// Market stock of each ordinary establishment.
    pub establishment_stock: u32,

    /// Turn limit for `play_game`.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GameConfig {
    /// Create a configuration with the standard starting hand:
    /// one working wheat field and one working bakery.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let starting_establishments = [
            (Card::WheatField, EstablishmentCount::working(1)),
            (Card::Bakery, EstablishmentCount::working(1)),
        ]
        .into_iter()
        .collect();

        Self {
            player_count,
            starting_coins: DEFAULT_STARTING_COINS,
            starting_establishments,
            starting_major_establishments: Vec::new(),
            establishment_stock: DEFAULT_ESTABLISHMENT_STOCK,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Replace the starting establishments.
    #[must_use]
    pub fn with_starting_establishments(
        mut self,
        establishments: impl IntoIterator<Item = (Card, EstablishmentCount)>,
    ) -> Self {
        self.starting_establishments = establishments.into_iter().collect();
        self
    }

    /// Replace the starting major establishments.
    #[must_use]
    pub fn with_starting_major_establishments(mut self, majors: impl IntoIterator<Item = Card>) -> Self {
        self.starting_major_establishments = majors.into_iter().collect();
        self
    }

    /// Start every player with `count` of every regular establishment
    /// and every major establishment.
    #[must_use]
    pub fn with_all_buildings(self, count: EstablishmentCount) -> Self {
        let establishments = Card::ALL
            .into_iter()
            .filter(|card| card.is_establishment())
            .map(|card| (card, count));
        self.with_starting_establishments(establishments)
            .with_starting_major_establishments(Card::MAJOR_ESTABLISHMENTS)
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_establishment_stock(mut self, stock: u32) -> Self {
        self.establishment_stock = stock;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<()> {
        if !(2..=255).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be 2-255, got {}",
                self.player_count
            )));
        }

        if let Some(card) = self
            .starting_establishments
            .keys()
            .find(|card| !card.is_establishment())
        {
            return Err(GameError::InvalidConfig(format!(
                "{card} cannot be a starting establishment"
            )));
        }

        if let Some(card) = self
            .starting_major_establishments
            .iter()
            .find(|card| !card.is_major())
        {
            return Err(GameError::InvalidConfig(format!(
                "{card} is not a major establishment"
            )));
        }

        Ok(())
    }
}
