//! Game event types.
//!
//! Every coin movement, building transfer and turn step produces exactly
//! one `GameEvent`. Events are plain data: the engine records them and a
//! caller may inspect, serialize or discard them.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::DiceRoll;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    TurnStarted {
        turn: u32,
        player: PlayerId,
    },

    DiceRolled {
        player: PlayerId,
        dice: DiceRoll,
        reroll: bool,
    },

    /// A card's roll matched and it resolved with `working` open units.
    Activated {
        player: PlayerId,
        card: Card,
        working: u32,
    },

    /// Coins paid by the bank.
    Income {
        player: PlayerId,
        card: Card,
        amount: u32,
    },

    /// Coins paid from one player to another.
    Payment {
        from: PlayerId,
        to: PlayerId,
        card: Card,
        amount: u32,
    },

    /// Coins paid by a player to the bank.
    BankPayment {
        player: PlayerId,
        card: Card,
        amount: u32,
    },

    Reopened {
        player: PlayerId,
        card: Card,
        units: u32,
    },

    Closed {
        player: PlayerId,
        card: Card,
        units: u32,
    },

    /// One unit of `building` changed hands because of `cause`.
    BuildingTransferred {
        from: PlayerId,
        to: PlayerId,
        building: Card,
        renovating: bool,
        cause: Card,
    },

    LandmarkDemolished {
        player: PlayerId,
        landmark: Card,
    },

    /// Every balance was set to `per_player`.
    CoinsRedistributed {
        total: u32,
        per_player: u32,
    },

    /// A broke player received one coin before buying.
    CityHallGrant {
        player: PlayerId,
    },

    /// A card resolved without effect.
    NoEffect {
        player: PlayerId,
        card: Card,
    },

    Purchased {
        player: PlayerId,
        card: Card,
        cost: i32,
    },

    /// One coin moved into tech-startup savings.
    Invested {
        player: PlayerId,
        total: u32,
    },

    AirportBonus {
        player: PlayerId,
        amount: u32,
    },

    ExtraTurn {
        player: PlayerId,
    },

    GameWon {
        player: PlayerId,
        turn: u32,
    },
}

impl GameEvent {
    /// The player this event is mainly about.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::Activated { player, .. }
            | GameEvent::Income { player, .. }
            | GameEvent::BankPayment { player, .. }
            | GameEvent::Reopened { player, .. }
            | GameEvent::Closed { player, .. }
            | GameEvent::LandmarkDemolished { player, .. }
            | GameEvent::CityHallGrant { player }
            | GameEvent::NoEffect { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::Invested { player, .. }
            | GameEvent::AirportBonus { player, .. }
            | GameEvent::ExtraTurn { player }
            | GameEvent::GameWon { player, .. } => Some(player),
            GameEvent::Payment { to, .. } | GameEvent::BuildingTransferred { to, .. } => Some(to),
            GameEvent::CoinsRedistributed { .. } => None,
        }
    }
}

/// Ordered record of events.
///
/// A collecting log is unbounded: it keeps every event until `drain` is
/// called. A disabled log keeps nothing, for bulk simulation. Recording
/// emits a `trace!` line either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
    collecting: bool,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create a collecting log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            collecting: true,
        }
    }

    /// Create a log that drops everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            events: Vec::new(),
            collecting: false,
        }
    }

    #[must_use]
    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    pub fn record(&mut self, event: GameEvent) {
        trace!(?event, "event");
        if self.collecting {
            self.events.push(event);
        }
    }

    /// Take all collected events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
