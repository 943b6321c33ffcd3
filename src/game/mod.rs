//! Game facade.
//!
//! `MachiKoroGame` owns the state, the random source and the player
//! policy, and drives turns until someone holds every landmark.

mod machi_koro;

pub use machi_koro::MachiKoroGame;
