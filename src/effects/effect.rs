//! Effect context.
//!
//! An `EffectContext` carries everything a special effect needs beyond the
//! game state: which card fired, who owns it, how many units were open,
//! and any targets the activation engine picked in advance.

use crate::cards::Card;
use crate::core::{EstablishmentCount, PlayerId};

/// Inputs for resolving one special effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// The card that fired.
    pub card: Card,

    /// Who receives the effect's proceeds.
    pub owner: PlayerId,

    /// Units of the triggering card at activation time.
    pub units: EstablishmentCount,

    /// The opposing player, for effects aimed at one.
    pub target: Option<PlayerId>,

    /// A building held by the target (business center) or by anyone
    /// (renovation company).
    pub target_building: Option<Card>,

    /// The owner's building given away by the business center.
    pub own_building: Option<Card>,
}

impl EffectContext {
    /// Context for an establishment with the given unit counts.
    #[must_use]
    pub fn new(card: Card, owner: PlayerId, units: EstablishmentCount) -> Self {
        Self {
            card,
            owner,
            units,
            target: None,
            target_building: None,
            own_building: None,
        }
    }

    /// Context for a major establishment, which always counts as one unit.
    #[must_use]
    pub fn major(card: Card, owner: PlayerId) -> Self {
        Self::new(card, owner, EstablishmentCount::working(1))
    }

    #[must_use]
    pub fn with_target(mut self, target: PlayerId) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_target_building(mut self, building: Card) -> Self {
        self.target_building = Some(building);
        self
    }

    #[must_use]
    pub fn with_own_building(mut self, building: Card) -> Self {
        self.own_building = Some(building);
        self
    }

    /// Working units scaling the effect.
    #[must_use]
    pub fn working(&self) -> u32 {
        self.units.working
    }
}
