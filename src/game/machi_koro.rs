//! The playable game.

use tracing::{debug, info, warn};

use crate::core::{GameConfig, GameError, GameRng, GameState, PlayerId, RandomSource, Result};
use crate::events::{EventLog, GameEvent};
use crate::policy::{PlayerPolicy, RandomPolicy};
use crate::rules::{TurnEngine, TurnSummary};

/// A complete game: state, randomness and decision policy.
///
/// Events are collected by default and the log only grows until it is
/// drained. Long runs such as `play_game` should either drain it between
/// turns or switch collection off with `without_events`.
///
/// ## Usage
///
/// ```
/// use machi_koro::core::GameConfig;
/// use machi_koro::game::MachiKoroGame;
///
/// let mut game = MachiKoroGame::new(GameConfig::new(3), 42)
///     .unwrap()
///     .without_events();
/// let winner = game.play_game().unwrap();
///
/// assert_eq!(game.is_game_over(), (true, Some(winner)));
/// assert!(game.events().is_empty());
/// ```
pub struct MachiKoroGame<R: RandomSource = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    policy: Box<dyn PlayerPolicy>,
}

impl MachiKoroGame<GameRng> {
    /// Create a game driven by a seeded `GameRng`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> MachiKoroGame<R> {
    /// Create a game driven by any random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        let state = GameState::new(&config)?;
        debug!(players = config.player_count, "game created");
        Ok(Self {
            config,
            state,
            rng,
            policy: Box::new(RandomPolicy::default()),
        })
    }

    /// Replace the default random policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl PlayerPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Stop collecting events. They are still traced.
    #[must_use]
    pub fn without_events(mut self) -> Self {
        self.state.events = EventLog::disabled();
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access, for setting up positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.state.events
    }

    /// Take every event collected so far.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.drain()
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Play one turn for the current player.
    pub fn take_turn(&mut self) -> Result<TurnSummary> {
        if let Some(winner) = self.state.winner() {
            return Err(GameError::GameFinished(winner));
        }
        TurnEngine::take_turn(&mut self.state, &mut self.rng, self.policy.as_mut())
    }

    /// `(true, Some(winner))` once a player holds every landmark.
    #[must_use]
    pub fn is_game_over(&self) -> (bool, Option<PlayerId>) {
        let winner = self.winner();
        (winner.is_some(), winner)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Play turns until someone wins or the turn limit is reached.
    ///
    /// Every turn appends to the event log unless collection is off.
    pub fn play_game(&mut self) -> Result<PlayerId> {
        loop {
            if let Some(winner) = self.winner() {
                info!(%winner, turns = self.state.turn, "game over");
                return Ok(winner);
            }
            if self.state.turn >= self.config.max_turns {
                warn!(max_turns = self.config.max_turns, "turn limit reached without a winner");
                return Err(GameError::TurnLimitReached(self.config.max_turns));
            }
            self.take_turn()?;
        }
    }
}

impl<R: RandomSource + std::fmt::Debug> std::fmt::Debug for MachiKoroGame<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachiKoroGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}
