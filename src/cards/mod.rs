//! Card system: identifiers, static definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Every card in the game, in catalog order
//! - `CardDefinition`: Cost, activation rolls, value and industry
//! - `SpecialEffect`: Cards whose payout needs a dedicated handler
//! - `CATALOG`: The immutable, process-wide table of definitions

pub mod catalog;
pub mod definition;

pub use catalog::{landmarks_by_cost, CATALOG};
pub use definition::{Card, CardDefinition, CardValue, Industry, Sector, SpecialEffect};
