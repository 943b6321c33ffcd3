//! Special effect resolution.
//!
//! `EffectResolver::resolve` applies one `SpecialEffect` to the game
//! state. Every effect is an arm of one exhaustive match, so a catalog
//! entry without a handler does not compile.
//!
//! All cross-player payments are clamped to the payer's balance. After an
//! establishment's effect resolves, its renovating units reopen; the
//! winery is the exception since its effect sets its own state.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{landmarks_by_cost, Card, Sector, SpecialEffect};
use crate::core::{EstablishmentCount, GameState, PlayerId, RandomSource, Result};
use crate::events::GameEvent;

use super::effect::EffectContext;
use super::renovation;
use super::targeting::{random_held_building, richest_other};

/// Coins the moving company earns per building moved.
const MOVING_COMPANY_BONUS: u32 = 4;

/// Coins refunded per demolished landmark.
const DEMOLITION_REFUND: u32 = 8;

/// Minimum balance before the tax office collects.
const TAX_THRESHOLD: u32 = 10;

/// Resolves special effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` for the card described by `ctx`.
    pub fn resolve(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        effect: SpecialEffect,
        ctx: &EffectContext,
    ) -> Result<()> {
        let owner = ctx.owner;
        let card = ctx.card;
        let w = ctx.working();
        let mall = u32::from(state.player(owner).owns_landmark(Card::ShoppingMall));

        match effect {
            SpecialEffect::FruitAndVegetableMarket => {
                let wheat = Self::sector_units(state, owner, Sector::Wheat);
                state.pay_from_bank(owner, 2 * wheat * w, card);
            }

            SpecialEffect::CheeseFactory => {
                let cows = Self::sector_units(state, owner, Sector::Cow);
                state.pay_from_bank(owner, 3 * cows * w, card);
            }

            SpecialEffect::FurnitureFactory => {
                let gears = Self::sector_units(state, owner, Sector::Gear);
                state.pay_from_bank(owner, 3 * gears * w, card);
            }

            SpecialEffect::Stadium => {
                for other in state.reverse_seating(owner) {
                    state.transfer_coins(other, owner, 2 * w, card)?;
                }
            }

            SpecialEffect::TvStation => match ctx.target {
                Some(target) => {
                    state.transfer_coins(target, owner, 5 * w, card)?;
                }
                None => Self::no_effect(state, owner, card),
            },

            SpecialEffect::BusinessCenter => Self::business_center(state, ctx)?,

            SpecialEffect::TunaBoat => {
                let catch = u32::from(rng.roll_die()) + u32::from(rng.roll_die());
                debug!(player = %owner, catch, "tuna boat roll");
                state.pay_from_bank(owner, catch * w, card);
            }

            SpecialEffect::FlowerShop => {
                let gardens = state.player(owner).establishment(Card::FlowerGarden).total();
                state.pay_from_bank(owner, gardens * w, card);
            }

            SpecialEffect::FoodWarehouse => {
                let restaurants = state.player(owner).units_where(|def| def.is_restaurant());
                state.pay_from_bank(owner, 2 * restaurants * w, card);
            }

            SpecialEffect::SushiBar => match ctx.target {
                Some(target) if state.player(owner).owns_landmark(Card::Harbor) => {
                    state.transfer_coins(target, owner, (3 + mall) * w, card)?;
                }
                _ => Self::no_effect(state, owner, card),
            },

            SpecialEffect::Publisher => {
                for other in state.reverse_seating(owner) {
                    let owed = state.player(other).units_where(|def| {
                        def.is_restaurant() || (def.is_secondary() && def.sector() == Some(Sector::Bread))
                    });
                    state.transfer_coins(other, owner, owed * w, card)?;
                }
            }

            SpecialEffect::TaxOffice => {
                for other in state.reverse_seating(owner) {
                    let coins = state.player(other).coins();
                    if coins >= TAX_THRESHOLD {
                        state.transfer_coins(other, owner, (coins / 2) * w, card)?;
                    }
                }
            }

            SpecialEffect::CornField => {
                if state.player(owner).landmark_count() < 2 {
                    state.pay_from_bank(owner, 2 * w, card);
                }
            }

            SpecialEffect::GeneralStore => {
                if state.player(owner).landmark_count() < 2 {
                    state.pay_from_bank(owner, (2 + mall) * w, card);
                }
            }

            SpecialEffect::MovingCompany => Self::moving_company(state, rng, ctx)?,

            // Single use per cycle: a winery that paid closes, and a closed
            // one reopens on its next matching roll.
            SpecialEffect::Winery => {
                let vineyards = state.player(owner).establishment(Card::Vineyard).total();
                state.pay_from_bank(owner, 6 * vineyards * w, card);

                let current = state.player(owner).establishment(Card::Winery);
                let swapped = EstablishmentCount::new(current.on_renovation, current.working);
                state.player_mut(owner).set_establishment(Card::Winery, swapped)?;
                if current.working > 0 {
                    state.events.record(GameEvent::Closed { player: owner, card, units: current.working });
                }
                if current.on_renovation > 0 {
                    state.events.record(GameEvent::Reopened { player: owner, card, units: current.on_renovation });
                }
            }

            SpecialEffect::DemolitionCompany => {
                let owned: SmallVec<[Card; 6]> = landmarks_by_cost()
                    .into_iter()
                    .filter(|&landmark| state.player(owner).owns_landmark(landmark))
                    .collect();
                for landmark in owned.into_iter().take(w as usize) {
                    state.player_mut(owner).set_landmark(landmark, false)?;
                    state.market.restock(landmark, owner)?;
                    state.events.record(GameEvent::LandmarkDemolished { player: owner, landmark });
                    state.pay_from_bank(owner, DEMOLITION_REFUND, card);
                }
            }

            SpecialEffect::SodaBottlingPlant => {
                let restaurants: u32 = state
                    .players()
                    .map(|player| player.units_where(|def| def.is_restaurant()))
                    .sum();
                state.pay_from_bank(owner, restaurants * w, card);
            }

            SpecialEffect::FrenchRestaurant => match ctx.target {
                Some(target) if state.player(target).landmark_count() >= 2 => {
                    for _ in 0..w {
                        state.transfer_coins(target, owner, 5 + mall, card)?;
                    }
                }
                _ => Self::no_effect(state, owner, card),
            },

            SpecialEffect::MembersOnlyClub => {
                debug!(player = %owner, "members only club has no effect");
                Self::no_effect(state, owner, card);
            }

            SpecialEffect::Park => {
                let total: u32 = state.players().map(|player| player.coins()).sum();
                let per_player = total.div_ceil(state.player_count() as u32);
                for (_, player) in state.players_mut() {
                    player.set_coins(per_player);
                }
                state.events.record(GameEvent::CoinsRedistributed { total, per_player });
            }

            SpecialEffect::RenovationCompany => match ctx.target_building {
                Some(building) => {
                    let ids: Vec<PlayerId> = state.player_ids().collect();
                    for id in ids {
                        renovation::close(state, id, building)?;
                    }
                }
                None => Self::no_effect(state, owner, card),
            },

            SpecialEffect::TechStartup => {
                let invested = state.player(owner).invested();
                if invested > 0 {
                    let others = state.reverse_seating(owner);
                    for _ in 0..w {
                        for &other in &others {
                            state.transfer_coins(other, owner, invested, card)?;
                        }
                    }
                }
            }
        }

        if card.is_establishment() && card != Card::Winery {
            renovation::open(state, owner, card)?;
        }
        Ok(())
    }

    /// Units (working and renovating) of primary cards in `sector`.
    fn sector_units(state: &GameState, player: PlayerId, sector: Sector) -> u32 {
        state
            .player(player)
            .units_where(|def| def.is_primary() && def.sector() == Some(sector))
    }

    fn no_effect(state: &mut GameState, player: PlayerId, card: Card) {
        state.events.record(GameEvent::NoEffect { player, card });
    }

    /// Exchange one building with the target: a working unit is taken from
    /// the target when possible, and a renovating unit is given when
    /// possible.
    fn business_center(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
        let (Some(target), Some(taken), Some(given)) = (ctx.target, ctx.target_building, ctx.own_building)
        else {
            Self::no_effect(state, ctx.owner, ctx.card);
            return Ok(());
        };

        let renovating = state.player(target).establishment(taken).working == 0;
        Self::move_unit(state, target, ctx.owner, taken, renovating, ctx.card)?;

        let renovating = state.player(ctx.owner).establishment(given).on_renovation > 0;
        Self::move_unit(state, ctx.owner, target, given, renovating, ctx.card)
    }

    /// Give away one random building per working unit, renovating units
    /// first, to whoever is richest at the time of each move.
    fn moving_company(state: &mut GameState, rng: &mut dyn RandomSource, ctx: &EffectContext) -> Result<()> {
        let owner = ctx.owner;
        for _ in 0..ctx.working() {
            let Some(target) = richest_other(state, owner) else { break };
            let Some(building) = random_held_building(state.player(owner), rng) else { break };

            let renovating = state.player(owner).establishment(building).on_renovation > 0;
            Self::move_unit(state, owner, target, building, renovating, ctx.card)?;
            state.pay_from_bank(owner, MOVING_COMPANY_BONUS, ctx.card);
        }
        Ok(())
    }

    /// Move a single unit of `building`, keeping its renovation state.
    fn move_unit(
        state: &mut GameState,
        from: PlayerId,
        to: PlayerId,
        building: Card,
        renovating: bool,
        cause: Card,
    ) -> Result<()> {
        state.player_mut(from).remove_unit(building, renovating)?;
        let unit = if renovating {
            EstablishmentCount::new(0, 1)
        } else {
            EstablishmentCount::working(1)
        };
        state.player_mut(to).add_units(building, unit)?;
        state.events.record(GameEvent::BuildingTransferred { from, to, building, renovating, cause });
        Ok(())
    }
}
