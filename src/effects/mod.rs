//! Card effects.
//!
//! ## Key Types
//!
//! - `EffectContext`: card, owner, unit counts and pre-chosen targets
//! - `EffectResolver`: applies a `SpecialEffect` to the game state
//! - `renovation`: opening and closing establishment units
//! - `targeting`: richest opponent and random building selection

mod effect;
pub mod renovation;
mod resolver;
pub mod targeting;

pub use effect::EffectContext;
pub use resolver::EffectResolver;
pub use targeting::{random_building_in_play, random_held_building, richest_other};
