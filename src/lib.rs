//! # machi-koro-sim
//!
//! A simulator for the Machi Koro city-building dice game.
//!
//! Players collect coins when dice rolls activate their establishments and
//! spend them on more establishments and on landmarks. The first player to
//! build every landmark wins.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes the player count from state.
//!    Nothing assumes two players.
//!
//! 2. **Injected Randomness**: All dice and choices go through
//!    `RandomSource`. Same seed, same game.
//!
//! 3. **Checked Mutation**: Balances and building counts change only
//!    through mutators that refuse to break invariants.
//!
//! ## Modules
//!
//! - `cards`: Static card catalog
//! - `core`: Players, state, RNG, configuration, errors
//! - `market`: Card supply and purchasing
//! - `effects`: Special card effects, renovation and targeting
//! - `rules`: Activation and turn engines
//! - `policy`: Pluggable player decisions
//! - `events`: Observable event stream
//! - `game`: The `MachiKoroGame` facade

pub mod cards;
pub mod core;
pub mod effects;
pub mod events;
pub mod game;
pub mod market;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardDefinition, CardValue, Industry, Sector, SpecialEffect};

pub use crate::core::{
    EstablishmentCount, GameConfig, GameError, GameRng, GameState, Player, PlayerId, PlayerMap, RandomSource,
    Result, ScriptedRandom,
};

pub use crate::effects::{EffectContext, EffectResolver};
pub use crate::events::{EventLog, GameEvent};
pub use crate::game::MachiKoroGame;
pub use crate::market::Market;
pub use crate::policy::{PlayerPolicy, RandomPolicy};
pub use crate::rules::{ActivationEngine, DiceRoll, TurnEngine, TurnSummary};
