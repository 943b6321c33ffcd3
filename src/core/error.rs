//! Error types for the simulation.
//!
//! Every payment and decrement in the engine is clamped before it is
//! applied, so an `InvariantViolation` reaching a caller means a contract
//! was broken inside the engine. It is surfaced immediately and never
//! recovered from.

use super::player::PlayerId;
use crate::cards::Card;

/// Convenience alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors raised by the engine and its configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("unknown card name: '{0}'")]
    UnknownCard(String),

    #[error("invariant violation for {player}: {violation}")]
    InvariantViolation { player: PlayerId, violation: Violation },

    #[error("{player} cannot purchase {card}")]
    CardUnavailable { player: PlayerId, card: Card },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("game is over, {0} has already won")]
    GameFinished(PlayerId),

    #[error("no winner after {0} turns")]
    TurnLimitReached(u32),
}

/// The specific rule a mutation would have broken.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("debit of {requested} exceeds balance of {available}")]
    Overdraw { requested: u32, available: u32 },

    #[error("no {card} unit to remove")]
    MissingUnit { card: Card },

    #[error("{card} is not a landmark")]
    NotALandmark { card: Card },

    #[error("{card} is not a major establishment")]
    NotAMajor { card: Card },

    #[error("{card} is not a regular establishment")]
    NotAnEstablishment { card: Card },
}

impl GameError {
    pub(crate) fn violation(player: PlayerId, violation: Violation) -> Self {
        Self::InvariantViolation { player, violation }
    }
}
