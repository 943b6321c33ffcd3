//! Target selection for effects.
//!
//! - `richest_other`: the opponent with the most coins, lower seat on ties
//! - `random_held_building`: one of a player's non-empty establishments
//! - `random_building_in_play`: any establishment held by anyone

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{choose, GameState, Player, PlayerId, RandomSource};

/// The other player with the highest balance.
///
/// Ties go to the lowest seat. `None` only in a one-player state.
#[must_use]
pub fn richest_other(state: &GameState, player: PlayerId) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, u32)> = None;
    for other in state.player_ids().filter(|&id| id != player) {
        let coins = state.player(other).coins();
        if best.map_or(true, |(_, top)| coins > top) {
            best = Some((other, coins));
        }
    }
    best.map(|(id, _)| id)
}

/// A uniformly random establishment with at least one unit.
pub fn random_held_building(player: &Player, rng: &mut dyn RandomSource) -> Option<Card> {
    choose(rng, &player.held_buildings()).copied()
}

/// A uniformly random establishment name held by any player.
///
/// Each name is counted once regardless of how many players hold it.
pub fn random_building_in_play(state: &GameState, rng: &mut dyn RandomSource) -> Option<Card> {
    let names: SmallVec<[Card; 32]> = Card::ALL
        .into_iter()
        .filter(|&card| state.players().any(|player| player.holds(card)))
        .collect();
    choose(rng, &names).copied()
}
