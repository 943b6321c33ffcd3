//! Card market.
//!
//! ## Key Types
//!
//! - `Market`: remaining supply per card, purchase and restock

pub mod supply;

pub use supply::Market;
