//! Shared helpers for integration tests.

#![allow(dead_code)]

use machi_koro::cards::Card;
use machi_koro::core::{GameState, PlayerId, RandomSource};
use machi_koro::policy::PlayerPolicy;
use machi_koro::rules::DiceRoll;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Policy that never buys, rerolls or invests, and rolls a fixed number
/// of dice.
#[derive(Clone, Debug)]
pub struct IdlePolicy {
    pub dice: u8,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self { dice: 1 }
    }
}

impl PlayerPolicy for IdlePolicy {
    fn dice_count(&mut self, _: &GameState, _: PlayerId, _: &mut dyn RandomSource) -> u8 {
        self.dice
    }

    fn reroll(&mut self, _: &GameState, _: PlayerId, _: &DiceRoll, _: &mut dyn RandomSource) -> bool {
        false
    }

    fn choose_purchase(
        &mut self,
        _: &GameState,
        _: PlayerId,
        _: &[Card],
        _: &mut dyn RandomSource,
    ) -> Option<Card> {
        None
    }

    fn invest_in_startup(&mut self, _: &GameState, _: PlayerId, _: &mut dyn RandomSource) -> bool {
        false
    }
}

/// Buys the most expensive affordable landmark, otherwise the cheapest
/// legal card that never costs it buildings or landmarks.
#[derive(Clone, Debug, Default)]
pub struct LandmarkRush;

impl PlayerPolicy for LandmarkRush {
    fn dice_count(&mut self, _: &GameState, _: PlayerId, _: &mut dyn RandomSource) -> u8 {
        2
    }

    fn reroll(&mut self, _: &GameState, _: PlayerId, roll: &DiceRoll, _: &mut dyn RandomSource) -> bool {
        roll.total() < 4
    }

    fn choose_purchase(
        &mut self,
        _: &GameState,
        _: PlayerId,
        legal: &[Card],
        _: &mut dyn RandomSource,
    ) -> Option<Card> {
        let cost = |card: &&Card| card.definition().cost;
        legal
            .iter()
            .filter(|card| card.is_landmark())
            .max_by_key(cost)
            .or_else(|| {
                legal
                    .iter()
                    .filter(|card| card.definition().cost > 0)
                    .filter(|card| !matches!(card, Card::DemolitionCompany | Card::MovingCompany))
                    .min_by_key(cost)
            })
            .copied()
    }

    fn invest_in_startup(&mut self, state: &GameState, player: PlayerId, _: &mut dyn RandomSource) -> bool {
        state.player(player).coins() > 20
    }
}

/// Check the state-wide invariants that must hold between turns.
pub fn assert_invariants(state: &GameState) {
    let n = state.player_count() as u32;

    for player in state.players() {
        for (card, count) in player.establishments() {
            assert!(!count.is_empty(), "{} holds an empty {card} entry", player.id());
            assert!(card.is_establishment());
        }
    }

    for card in Card::ALL.into_iter().filter(|card| card.is_unique()) {
        let owners = state.players().filter(|p| p.owns_unique(card)).count() as u32;
        assert_eq!(state.market.stock(card) + owners, n, "{card} copies not conserved");
    }
}
