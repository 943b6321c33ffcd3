//! Card activation for a dice roll.
//!
//! `ActivationEngine::activate` resolves one roll across every player's
//! holdings in four phases:
//!
//! 1. Restaurants of the other players, nearest previous seat first, paid
//!    by the acting player. Stops once the acting player is broke.
//! 2. The acting player's secondary industry: loan office, then moving
//!    company, then everything else in catalog order. An owned loan office
//!    charges on every roll.
//! 3. Primary industry of every player in seat order.
//! 4. The acting player's major establishments, business center last.
//!
//! Apart from the loan office, only cards whose roll set contains the roll
//! take part. A matching card
//! with no working units but some on renovation reopens instead of
//! producing.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardValue, Sector};
use crate::core::{EstablishmentCount, GameState, PlayerId, RandomSource, Result};
use crate::effects::{
    random_building_in_play, random_held_building, renovation, richest_other, EffectContext, EffectResolver,
};
use crate::events::GameEvent;

/// Snapshot of a player's matching establishments for one phase.
type Holdings = SmallVec<[(Card, EstablishmentCount); 8]>;

/// Resolves a roll into payments and effects.
pub struct ActivationEngine;

impl ActivationEngine {
    /// Activate every card matching `roll` for `player`'s turn.
    pub fn activate(state: &mut GameState, rng: &mut dyn RandomSource, player: PlayerId, roll: u8) -> Result<()> {
        Self::restaurants(state, rng, player, roll)?;
        Self::secondary_industry(state, rng, player, roll)?;
        Self::primary_industry(state, rng, roll)?;
        Self::major_establishments(state, rng, player, roll)?;
        debug!(%player, roll, "activation complete");
        Ok(())
    }

    /// Establishments of `owner` matching `roll` and `filter`.
    fn matching(state: &GameState, owner: PlayerId, roll: u8, filter: impl Fn(Card) -> bool) -> Holdings {
        state
            .player(owner)
            .establishments()
            .filter(|&(card, _)| card.definition().activates_on(roll) && filter(card))
            .collect()
    }

    /// Reopen a card that matched with no working units. Returns true if
    /// the card must not produce this roll.
    fn reopen_if_idle(state: &mut GameState, owner: PlayerId, card: Card, count: EstablishmentCount) -> Result<bool> {
        if count.working > 0 {
            return Ok(false);
        }
        renovation::open(state, owner, card)?;
        Ok(true)
    }

    fn record_activation(state: &mut GameState, player: PlayerId, card: Card, working: u32) {
        state.events.record(GameEvent::Activated { player, card, working });
    }

    // === Phase 1 ===

    fn restaurants(state: &mut GameState, rng: &mut dyn RandomSource, player: PlayerId, roll: u8) -> Result<()> {
        'owners: for owner in state.reverse_seating(player) {
            let mall = u32::from(state.player(owner).owns_landmark(Card::ShoppingMall));
            let holdings = Self::matching(state, owner, roll, |card| card.definition().is_restaurant());

            for (card, count) in holdings {
                if state.player(player).coins() == 0 {
                    break 'owners;
                }
                if Self::reopen_if_idle(state, owner, card, count)? {
                    continue;
                }

                Self::record_activation(state, owner, card, count.working);
                match card.definition().value {
                    CardValue::Flat(value) => {
                        let amount = (flat(value) + mall) * count.working;
                        state.transfer_coins(player, owner, amount, card)?;
                    }
                    CardValue::Special(effect) => {
                        let ctx = EffectContext::new(card, owner, count).with_target(player);
                        EffectResolver::resolve(state, rng, effect, &ctx)?;
                    }
                    CardValue::Passive => {}
                }
            }
        }
        Ok(())
    }

    // === Phase 2 ===

    fn secondary_industry(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        player: PlayerId,
        roll: u8,
    ) -> Result<()> {
        Self::loan_office(state, player)?;

        for (card, count) in Self::matching(state, player, roll, |card| card == Card::MovingCompany) {
            Self::resolve_own(state, rng, player, card, count, 0)?;
        }

        let mall = u32::from(state.player(player).owns_landmark(Card::ShoppingMall));
        let holdings = Self::matching(state, player, roll, |card| {
            card.definition().is_secondary() && !matches!(card, Card::LoanOffice | Card::MovingCompany)
        });
        for (card, count) in holdings {
            let bonus = if card.definition().sector() == Some(Sector::Bread) {
                mall
            } else {
                0
            };
            Self::resolve_own(state, rng, player, card, count, bonus)?;
        }
        Ok(())
    }

    /// The loan office charges its owner on every roll, whatever the
    /// total, and then reopens.
    fn loan_office(state: &mut GameState, player: PlayerId) -> Result<()> {
        let count = state.player(player).establishment(Card::LoanOffice);
        if count.is_empty() {
            return Ok(());
        }
        if Self::reopen_if_idle(state, player, Card::LoanOffice, count)? {
            return Ok(());
        }

        Self::record_activation(state, player, Card::LoanOffice, count.working);
        if let CardValue::Flat(value) = Card::LoanOffice.definition().value {
            state.pay_to_bank(player, value.unsigned_abs() * count.working, Card::LoanOffice)?;
        }
        renovation::open(state, player, Card::LoanOffice)?;
        Ok(())
    }

    // === Phase 3 ===

    fn primary_industry(state: &mut GameState, rng: &mut dyn RandomSource, roll: u8) -> Result<()> {
        let owners: SmallVec<[PlayerId; 8]> = state.player_ids().collect();
        for owner in owners {
            for (card, count) in Self::matching(state, owner, roll, |card| card.definition().is_primary()) {
                Self::resolve_own(state, rng, owner, card, count, 0)?;
            }
        }
        Ok(())
    }

    /// Pay or resolve an establishment whose proceeds come from the bank.
    fn resolve_own(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        owner: PlayerId,
        card: Card,
        count: EstablishmentCount,
        bonus: u32,
    ) -> Result<()> {
        if Self::reopen_if_idle(state, owner, card, count)? {
            return Ok(());
        }

        Self::record_activation(state, owner, card, count.working);
        match card.definition().value {
            CardValue::Flat(value) => {
                state.pay_from_bank(owner, (flat(value) + bonus) * count.working, card);
            }
            CardValue::Special(effect) => {
                let ctx = EffectContext::new(card, owner, count);
                EffectResolver::resolve(state, rng, effect, &ctx)?;
            }
            CardValue::Passive => {}
        }
        Ok(())
    }

    // === Phase 4 ===

    fn major_establishments(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        player: PlayerId,
        roll: u8,
    ) -> Result<()> {
        let majors: SmallVec<[Card; 8]> = state
            .player(player)
            .majors()
            .filter(|&card| card != Card::BusinessCenter && card.definition().activates_on(roll))
            .collect();

        for card in majors {
            let mut ctx = EffectContext::major(card, player);
            match card {
                Card::TvStation => {
                    if let Some(target) = richest_other(state, player) {
                        ctx = ctx.with_target(target);
                    }
                }
                Card::RenovationCompany => {
                    if let Some(building) = random_building_in_play(state, rng) {
                        ctx = ctx.with_target_building(building);
                    }
                }
                _ => {}
            }
            Self::resolve_major(state, rng, ctx)?;
        }

        if state.player(player).owns_major(Card::BusinessCenter)
            && Card::BusinessCenter.definition().activates_on(roll)
        {
            let mut ctx = EffectContext::major(Card::BusinessCenter, player);
            if let Some(target) = richest_other(state, player) {
                ctx = ctx.with_target(target);
                if let Some(building) = random_held_building(state.player(target), rng) {
                    ctx = ctx.with_target_building(building);
                }
                if let Some(building) = random_held_building(state.player(player), rng) {
                    ctx = ctx.with_own_building(building);
                }
            }
            Self::resolve_major(state, rng, ctx)?;
        }
        Ok(())
    }

    fn resolve_major(state: &mut GameState, rng: &mut dyn RandomSource, ctx: EffectContext) -> Result<()> {
        Self::record_activation(state, ctx.owner, ctx.card, 1);
        if let CardValue::Special(effect) = ctx.card.definition().value {
            EffectResolver::resolve(state, rng, effect, &ctx)?;
        }
        Ok(())
    }
}

/// Non-negative flat value.
fn flat(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
