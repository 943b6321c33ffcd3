//! Game state: players, market, and turn pointers.
//!
//! ## Player
//!
//! Per-player holdings:
//! - Coins and tech-startup savings
//! - Landmark and major-establishment flags over fixed key sets
//! - Regular establishments as `{working, on_renovation}` counts
//!
//! Fields are private. Mutators return `Result` and refuse any change that
//! would break an invariant, so a violation is reported at the point it
//! would have happened.
//!
//! ## GameState
//!
//! Everything the engines read and mutate: players, market, the current
//! player, the turn counter and the event log.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::error::{GameError, Result, Violation};
use super::player::{reverse_seating, PlayerId, PlayerMap};
use crate::cards::{Card, CardDefinition};
use crate::events::{EventLog, GameEvent};
use crate::market::Market;

/// Units of one establishment held by a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstablishmentCount {
    /// Units able to activate.
    pub working: u32,
    /// Units temporarily closed.
    pub on_renovation: u32,
}

impl EstablishmentCount {
    #[must_use]
    pub const fn new(working: u32, on_renovation: u32) -> Self {
        Self { working, on_renovation }
    }

    /// All units open.
    #[must_use]
    pub const fn working(count: u32) -> Self {
        Self::new(count, 0)
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.working + self.on_renovation
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    coins: u32,
    landmarks: FxHashMap<Card, bool>,
    major_establishments: FxHashMap<Card, bool>,
    establishments: OrdMap<Card, EstablishmentCount>,
    invested: u32,

    /// The very first turn skips rolling and activation.
    pub is_first_turn: bool,
}

impl Player {
    /// Create a player with the configured starting holdings.
    #[must_use]
    pub fn new(id: PlayerId, config: &GameConfig) -> Self {
        let landmarks = Card::LANDMARKS.iter().map(|&card| (card, false)).collect();
        let major_establishments = Card::MAJOR_ESTABLISHMENTS
            .iter()
            .map(|&card| (card, config.starting_major_establishments.contains(&card)))
            .collect();
        let establishments = config
            .starting_establishments
            .iter()
            .filter(|(_, count)| !count.is_empty())
            .map(|(&card, &count)| (card, count))
            .collect();

        Self {
            id,
            coins: config.starting_coins,
            landmarks,
            major_establishments,
            establishments,
            invested: 0,
            is_first_turn: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    // === Coins ===

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn credit(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Remove coins. Fails rather than going below zero.
    pub fn debit(&mut self, amount: u32) -> Result<()> {
        self.coins = self.coins.checked_sub(amount).ok_or_else(|| {
            GameError::violation(
                self.id,
                Violation::Overdraw { requested: amount, available: self.coins },
            )
        })?;
        Ok(())
    }

    /// Overwrite the balance (city hall grant, park redistribution).
    pub fn set_coins(&mut self, coins: u32) {
        self.coins = coins;
    }

    /// Tech-startup savings.
    #[must_use]
    pub fn invested(&self) -> u32 {
        self.invested
    }

    /// Move coins from the balance into tech-startup savings.
    pub fn invest(&mut self, amount: u32) -> Result<()> {
        self.debit(amount)?;
        self.invested += amount;
        Ok(())
    }

    // === Landmarks and majors ===

    #[must_use]
    pub fn owns_landmark(&self, card: Card) -> bool {
        self.landmarks.get(&card).copied().unwrap_or(false)
    }

    pub fn set_landmark(&mut self, card: Card, owned: bool) -> Result<()> {
        match self.landmarks.get_mut(&card) {
            Some(flag) => {
                *flag = owned;
                Ok(())
            }
            None => Err(GameError::violation(self.id, Violation::NotALandmark { card })),
        }
    }

    /// Number of landmarks owned.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.values().filter(|&&owned| owned).count()
    }

    /// Owned landmarks in key-set order.
    pub fn landmarks(&self) -> impl Iterator<Item = Card> + '_ {
        Card::LANDMARKS.into_iter().filter(|&card| self.owns_landmark(card))
    }

    /// A player with every landmark has won.
    #[must_use]
    pub fn has_all_landmarks(&self) -> bool {
        self.landmarks.values().all(|&owned| owned)
    }

    #[must_use]
    pub fn owns_major(&self, card: Card) -> bool {
        self.major_establishments.get(&card).copied().unwrap_or(false)
    }

    pub fn set_major(&mut self, card: Card, owned: bool) -> Result<()> {
        match self.major_establishments.get_mut(&card) {
            Some(flag) => {
                *flag = owned;
                Ok(())
            }
            None => Err(GameError::violation(self.id, Violation::NotAMajor { card })),
        }
    }

    /// Owned majors in resolution order.
    pub fn majors(&self) -> impl Iterator<Item = Card> + '_ {
        Card::MAJOR_ESTABLISHMENTS
            .into_iter()
            .filter(|&card| self.owns_major(card))
    }

    /// Owns the landmark or major `card`.
    #[must_use]
    pub fn owns_unique(&self, card: Card) -> bool {
        self.owns_landmark(card) || self.owns_major(card)
    }

    // === Establishments ===

    /// Counts for `card`; zero if not held.
    #[must_use]
    pub fn establishment(&self, card: Card) -> EstablishmentCount {
        self.establishments.get(&card).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.establishments.contains_key(&card)
    }

    /// Held establishments in catalog order.
    pub fn establishments(&self) -> impl Iterator<Item = (Card, EstablishmentCount)> + '_ {
        self.establishments.iter().map(|(&card, &count)| (card, count))
    }

    /// Held establishments with at least one unit, in catalog order.
    #[must_use]
    pub fn held_buildings(&self) -> SmallVec<[Card; 16]> {
        self.establishments()
            .filter(|(_, count)| !count.is_empty())
            .map(|(card, _)| card)
            .collect()
    }

    /// Total units (working and renovating) of cards matching `filter`.
    #[must_use]
    pub fn units_where(&self, filter: impl Fn(&CardDefinition) -> bool) -> u32 {
        self.establishments()
            .filter(|(card, _)| filter(card.definition()))
            .map(|(_, count)| count.total())
            .sum()
    }

    /// Add units of a regular establishment, creating the entry if absent.
    pub fn add_units(&mut self, card: Card, units: EstablishmentCount) -> Result<()> {
        if !card.is_establishment() {
            return Err(GameError::violation(self.id, Violation::NotAnEstablishment { card }));
        }
        let entry = self
            .establishments
            .entry(card)
            .or_insert_with(EstablishmentCount::default);
        entry.working += units.working;
        entry.on_renovation += units.on_renovation;
        Ok(())
    }

    /// Remove a single unit, taking a renovating unit if `renovating` is set.
    ///
    /// An entry emptied by the removal is dropped.
    pub fn remove_unit(&mut self, card: Card, renovating: bool) -> Result<()> {
        let missing = || GameError::violation(self.id, Violation::MissingUnit { card });
        let entry = self.establishments.get_mut(&card).ok_or_else(missing)?;
        let slot = if renovating {
            &mut entry.on_renovation
        } else {
            &mut entry.working
        };
        *slot = slot.checked_sub(1).ok_or_else(missing)?;

        if entry.is_empty() {
            self.establishments.remove(&card);
        }
        Ok(())
    }

    /// Overwrite the counts for a held establishment.
    pub fn set_establishment(&mut self, card: Card, count: EstablishmentCount) -> Result<()> {
        if !card.is_establishment() {
            return Err(GameError::violation(self.id, Violation::NotAnEstablishment { card }));
        }
        if count.is_empty() {
            self.establishments.remove(&card);
        } else {
            self.establishments.insert(card, count);
        }
        Ok(())
    }

    /// Drop entries with no units left. Returns how many were dropped.
    pub fn remove_empty_establishments(&mut self) -> usize {
        let empty: SmallVec<[Card; 4]> = self
            .establishments()
            .filter(|(_, count)| count.is_empty())
            .map(|(card, _)| card)
            .collect();
        for card in &empty {
            self.establishments.remove(card);
        }
        empty.len()
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Remaining supply per card.
    pub market: Market,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Turns started so far.
    pub turn: u32,

    /// Observable record of everything that happened.
    pub events: EventLog,
}

impl GameState {
    /// Create the initial state for a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let players = PlayerMap::new(config.player_count, |id| Player::new(id, config));
        let market = Market::new(config.player_count, config.establishment_stock, players.values());

        Ok(Self {
            players,
            market,
            current_player: PlayerId::new(0),
            turn: 0,
            events: EventLog::new(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        self.players.iter_mut()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// Opponents of `player` in payment order.
    #[must_use]
    pub fn reverse_seating(&self, player: PlayerId) -> SmallVec<[PlayerId; 8]> {
        reverse_seating(player, self.player_count())
    }

    // === Money movement ===

    /// Move up to `amount` coins from `from` to `to`.
    ///
    /// The payment is clamped to the payer's balance. Returns what was
    /// actually paid and records a payment event when it is non-zero.
    pub fn transfer_coins(&mut self, from: PlayerId, to: PlayerId, amount: u32, card: Card) -> Result<u32> {
        let paid = amount.min(self.players[from].coins());
        if paid == 0 {
            return Ok(0);
        }
        self.players[from].debit(paid)?;
        self.players[to].credit(paid);
        self.events.record(GameEvent::Payment { from, to, card, amount: paid });
        Ok(paid)
    }

    /// Pay `amount` from the bank to `player`.
    pub fn pay_from_bank(&mut self, player: PlayerId, amount: u32, card: Card) {
        if amount == 0 {
            return;
        }
        self.players[player].credit(amount);
        self.events.record(GameEvent::Income { player, card, amount });
    }

    /// Pay up to `amount` from `player` to the bank, clamped to the balance.
    pub fn pay_to_bank(&mut self, player: PlayerId, amount: u32, card: Card) -> Result<u32> {
        let paid = amount.min(self.players[player].coins());
        if paid == 0 {
            return Ok(0);
        }
        self.players[player].debit(paid)?;
        self.events.record(GameEvent::BankPayment { player, card, amount: paid });
        Ok(paid)
    }

    // === Market ===

    /// Buy `card` for `player` from the market.
    pub fn purchase(&mut self, player: PlayerId, card: Card) -> Result<i32> {
        let cost = self.market.purchase(card, &mut self.players[player])?;
        self.events.record(GameEvent::Purchased { player, card, cost });
        Ok(cost)
    }

    /// Every card `player` can buy right now.
    #[must_use]
    pub fn legal_purchases(&self, player: PlayerId) -> Vec<Card> {
        self.market.legal_purchases(&self.players[player])
    }

    // === Bookkeeping ===

    /// Remove establishment entries that have reached zero units.
    pub fn cleanup(&mut self) -> usize {
        self.players
            .iter_mut()
            .map(|(_, player)| player.remove_empty_establishments())
            .sum()
    }

    /// The first player, in seat order, holding every landmark.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.has_all_landmarks())
            .map(|(id, _)| id)
    }
}
