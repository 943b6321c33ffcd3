//! Core engine types: players, state, RNG, configuration and errors.
//!
//! Everything the rules engines read and mutate lives here. Engines never
//! reach into player fields directly; they go through the mutators on
//! `Player` and `GameState`, which refuse invariant-breaking changes.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_ESTABLISHMENT_STOCK, DEFAULT_MAX_TURNS, DEFAULT_STARTING_COINS};
pub use error::{GameError, Result, Violation};
pub use player::{reverse_seating, PlayerId, PlayerMap};
pub use rng::{choose, GameRng, RandomSource, ScriptedRandom};
pub use state::{EstablishmentCount, GameState, Player};
