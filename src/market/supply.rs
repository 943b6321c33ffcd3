//! Card supply and purchasing.
//!
//! The `Market` tracks how many copies of each card remain. Unique cards
//! (landmarks and majors) are stocked so that every player can own one:
//! `player_count` copies minus those already owned at game start.
//! Ordinary establishments start at a fixed stock.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{EstablishmentCount, GameError, Player, PlayerId, Result, Violation};

/// Remaining supply per card.
///
/// ## Usage
///
/// ```
/// use machi_koro::cards::Card;
/// use machi_koro::core::{GameConfig, Player, PlayerId};
/// use machi_koro::market::Market;
///
/// let config = GameConfig::new(2);
/// let player = Player::new(PlayerId::new(0), &config);
/// let market = Market::new(2, 6, [&player]);
///
/// assert_eq!(market.stock(Card::Airport), 2);
/// assert!(market.available(Card::Bakery, &player));
/// assert!(!market.available(Card::Airport, &player));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    stock: FxHashMap<Card, u32>,
}

impl Market {
    /// Stock the market for a new game.
    ///
    /// `players` are the freshly created players; unique cards they already
    /// own are removed from the supply.
    pub fn new<'a>(
        player_count: usize,
        establishment_stock: u32,
        players: impl IntoIterator<Item = &'a Player>,
    ) -> Self {
        let players: Vec<&Player> = players.into_iter().collect();

        let stock = Card::ALL
            .into_iter()
            .map(|card| {
                let count = if card.is_unique() {
                    let owners = players.iter().filter(|p| p.owns_unique(card)).count();
                    player_count.saturating_sub(owners) as u32
                } else {
                    establishment_stock
                };
                (card, count)
            })
            .collect();

        Self { stock }
    }

    /// Copies of `card` left.
    #[must_use]
    pub fn stock(&self, card: Card) -> u32 {
        self.stock.get(&card).copied().unwrap_or(0)
    }

    /// Can `player` buy `card` right now?
    #[must_use]
    pub fn available(&self, card: Card, player: &Player) -> bool {
        let affordable = i64::from(card.definition().cost) <= i64::from(player.coins());
        affordable && self.stock(card) > 0 && !player.owns_unique(card)
    }

    /// Every card `player` can buy, in catalog order.
    #[must_use]
    pub fn legal_purchases(&self, player: &Player) -> Vec<Card> {
        Card::ALL
            .into_iter()
            .filter(|&card| self.available(card, player))
            .collect()
    }

    /// Sell `card` to `player`. Returns the price paid (negative when the
    /// card pays out on purchase).
    pub fn purchase(&mut self, card: Card, player: &mut Player) -> Result<i32> {
        if !self.available(card, player) {
            return Err(GameError::CardUnavailable { player: player.id(), card });
        }

        let cost = card.definition().cost;
        if cost >= 0 {
            player.debit(cost.unsigned_abs())?;
        } else {
            player.credit(cost.unsigned_abs());
        }

        if card.is_landmark() {
            player.set_landmark(card, true)?;
        } else if card.is_major() {
            player.set_major(card, true)?;
        } else {
            player.add_units(card, EstablishmentCount::working(1))?;
        }

        if let Some(count) = self.stock.get_mut(&card) {
            *count -= 1;
        }
        debug!(player = %player.id(), %card, cost, "purchased");
        Ok(cost)
    }

    /// Return a demolished landmark to the supply.
    pub fn restock(&mut self, card: Card, owner: PlayerId) -> Result<()> {
        if !card.is_landmark() {
            return Err(GameError::violation(owner, Violation::NotALandmark { card }));
        }
        *self.stock.entry(card).or_insert(0) += 1;
        Ok(())
    }

    /// Iterate over (card, stock) in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        Card::ALL.into_iter().map(|card| (card, self.stock(card)))
    }
}
