//! Game rules.
//!
//! ## Key Types
//!
//! - `DiceRoll`: one or two dice
//! - `ActivationEngine`: resolves a roll across every player's cards
//! - `TurnEngine`: runs a whole turn, from roll to purchase
//! - `TurnSummary`: what a turn did

pub mod activation;
pub mod dice;
pub mod turn;

pub use activation::ActivationEngine;
pub use dice::DiceRoll;
pub use turn::{TurnEngine, TurnSummary, AIRPORT_BONUS};
