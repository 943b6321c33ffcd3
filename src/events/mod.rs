//! Observable event stream.
//!
//! ## Key Types
//!
//! - `GameEvent`: one payment, transfer, purchase or turn step
//! - `EventLog`: collecting (or discarding) sink held in `GameState`

pub mod event;

pub use event::{EventLog, GameEvent};
