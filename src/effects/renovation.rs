//! Opening and closing establishments.
//!
//! `open` moves every renovating unit of a card back to working; `close`
//! does the reverse. Both report how many units moved and are no-ops for a
//! card the player does not hold.

use crate::cards::Card;
use crate::core::{EstablishmentCount, GameState, PlayerId, Result};
use crate::events::GameEvent;

/// Reopen every renovating unit of `card`.
pub fn open(state: &mut GameState, player: PlayerId, card: Card) -> Result<u32> {
    let count = state.player(player).establishment(card);
    if count.on_renovation == 0 {
        return Ok(0);
    }

    state
        .player_mut(player)
        .set_establishment(card, EstablishmentCount::working(count.total()))?;
    state.events.record(GameEvent::Reopened { player, card, units: count.on_renovation });
    Ok(count.on_renovation)
}

/// Send every working unit of `card` to renovation.
pub fn close(state: &mut GameState, player: PlayerId, card: Card) -> Result<u32> {
    let count = state.player(player).establishment(card);
    if count.working == 0 {
        return Ok(0);
    }

    state
        .player_mut(player)
        .set_establishment(card, EstablishmentCount::new(0, count.total()))?;
    state.events.record(GameEvent::Closed { player, card, units: count.working });
    Ok(count.working)
}
