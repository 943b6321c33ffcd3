//! Turn sequencing.
//!
//! A turn runs these steps in order:
//! 1. Start: bump the turn counter. A player's very first turn skips
//!    straight to step 4.
//! 2. Roll one die, or one or two with a train station. With a radio
//!    tower the player may reroll once.
//! 3. Activate cards for the roll, then drop emptied entries.
//! 4. City hall: a broke player receives one coin.
//! 5. Buy at most one card.
//! 6. Tech startup: optionally move one coin into savings.
//! 7. Airport: ten coins if nothing was bought.
//! 8. Advance: doubles with an amusement park keep the same player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{GameState, PlayerId, RandomSource, Result};
use crate::events::GameEvent;
use crate::policy::PlayerPolicy;

use super::activation::ActivationEngine;
use super::dice::DiceRoll;

/// Coins paid by the airport when nothing is bought.
pub const AIRPORT_BONUS: u32 = 10;

/// What happened during one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub turn: u32,
    pub player: PlayerId,
    /// The roll that was resolved; `None` on a first turn.
    pub roll: Option<DiceRoll>,
    pub rerolled: bool,
    pub city_hall: bool,
    pub purchase: Option<Card>,
    pub invested: bool,
    pub airport_bonus: bool,
    pub extra_turn: bool,
    /// Set once someone holds every landmark.
    pub winner: Option<PlayerId>,
}

/// Runs a single turn.
pub struct TurnEngine;

impl TurnEngine {
    /// Play one turn for `state.current_player`.
    pub fn take_turn(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        policy: &mut dyn PlayerPolicy,
    ) -> Result<TurnSummary> {
        state.turn += 1;
        let player = state.current_player;
        let mut summary = TurnSummary {
            turn: state.turn,
            player,
            ..TurnSummary::default()
        };
        state.events.record(GameEvent::TurnStarted { turn: state.turn, player });

        if !state.player(player).is_first_turn {
            let roll = Self::roll(state, rng, policy, player, &mut summary);
            ActivationEngine::activate(state, rng, player, roll.total())?;
            state.cleanup();
            summary.roll = Some(roll);
        }
        state.player_mut(player).is_first_turn = false;

        if state.player(player).coins() == 0 {
            state.player_mut(player).credit(1);
            state.events.record(GameEvent::CityHallGrant { player });
            summary.city_hall = true;
        }

        summary.purchase = Self::purchase(state, rng, policy, player)?;
        summary.invested = Self::invest(state, rng, policy, player)?;

        if summary.purchase.is_none() && state.player(player).owns_landmark(Card::Airport) {
            state.player_mut(player).credit(AIRPORT_BONUS);
            state.events.record(GameEvent::AirportBonus { player, amount: AIRPORT_BONUS });
            summary.airport_bonus = true;
        }

        let doubles = summary.roll.is_some_and(|roll| roll.is_doubles());
        if doubles && state.player(player).owns_landmark(Card::AmusementPark) {
            state.events.record(GameEvent::ExtraTurn { player });
            summary.extra_turn = true;
        } else {
            state.current_player = player.next(state.player_count());
        }

        summary.winner = state.winner();
        if let Some(winner) = summary.winner {
            state.events.record(GameEvent::GameWon { player: winner, turn: state.turn });
        }

        debug!(
            turn = summary.turn,
            %player,
            roll = summary.roll.map(|roll| roll.total()),
            purchase = ?summary.purchase,
            coins = state.player(player).coins(),
            "turn complete"
        );
        Ok(summary)
    }

    /// Roll, and reroll once if the radio tower allows and the policy wants.
    fn roll(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        policy: &mut dyn PlayerPolicy,
        player: PlayerId,
        summary: &mut TurnSummary,
    ) -> DiceRoll {
        let mut roll = Self::roll_once(state, rng, policy, player, false);

        if state.player(player).owns_landmark(Card::RadioTower) && policy.reroll(state, player, &roll, rng) {
            roll = Self::roll_once(state, rng, policy, player, true);
            summary.rerolled = true;
        }
        roll
    }

    fn roll_once(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        policy: &mut dyn PlayerPolicy,
        player: PlayerId,
        reroll: bool,
    ) -> DiceRoll {
        let count = if state.player(player).owns_landmark(Card::TrainStation) {
            policy.dice_count(state, player, rng)
        } else {
            1
        };
        let dice = DiceRoll::roll(rng, count);
        state.events.record(GameEvent::DiceRolled { player, dice, reroll });
        dice
    }

    fn purchase(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        policy: &mut dyn PlayerPolicy,
        player: PlayerId,
    ) -> Result<Option<Card>> {
        let legal = state.legal_purchases(player);
        if legal.is_empty() {
            return Ok(None);
        }

        match policy.choose_purchase(state, player, &legal, rng) {
            Some(card) => {
                state.purchase(player, card)?;
                Ok(Some(card))
            }
            None => Ok(None),
        }
    }

    fn invest(
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        policy: &mut dyn PlayerPolicy,
        player: PlayerId,
    ) -> Result<bool> {
        if !state.player(player).owns_major(Card::TechStartup) {
            return Ok(false);
        }
        if !policy.invest_in_startup(state, player, rng) || state.player(player).coins() == 0 {
            return Ok(false);
        }

        state.player_mut(player).invest(1)?;
        let total = state.player(player).invested();
        state.events.record(GameEvent::Invested { player, total });
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EstablishmentCount, GameConfig, ScriptedRandom};
    use crate::policy::RandomPolicy;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    /// Buys nothing, never rerolls or invests, always rolls `dice` dice.
    struct Passive {
        dice: u8,
    }

    impl PlayerPolicy for Passive {
        fn dice_count(&mut self, _: &GameState, _: PlayerId, _: &mut dyn RandomSource) -> u8 {
            self.dice
        }

        fn reroll(&mut self, _: &GameState, _: PlayerId, _: &DiceRoll, _: &mut dyn RandomSource) -> bool {
            false
        }

        fn choose_purchase(&mut self, _: &GameState, _: PlayerId, _: &[Card], _: &mut dyn RandomSource) -> Option<Card> {
            None
        }

        fn invest_in_startup(&mut self, _: &GameState, _: PlayerId, _: &mut dyn RandomSource) -> bool {
            false
        }
    }

    fn veteran_state(players: usize) -> GameState {
        let mut state = GameState::new(&GameConfig::new(players)).unwrap();
        for (_, player) in state.players_mut() {
            player.is_first_turn = false;
        }
        state
    }

    #[test]
    fn test_first_turn_skips_roll() {
        let mut state = GameState::new(&GameConfig::new(2)).unwrap();
        let mut rng = ScriptedRandom::new(0);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 1 }).unwrap();

        assert_eq!(summary.turn, 1);
        assert_eq!(summary.roll, None);
        assert!(!state.player(P0).is_first_turn);
        assert!(state.player(P1).is_first_turn);
        assert_eq!(state.current_player, P1);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::DiceRolled { .. })));
    }

    #[test]
    fn test_roll_and_activate() {
        let mut state = veteran_state(2);
        let mut rng = ScriptedRandom::new(0).with_dice([2]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 1 }).unwrap();

        assert_eq!(summary.roll, Some(DiceRoll::single(2)));
        assert_eq!(state.player(P0).coins(), 4);
    }

    #[test]
    fn test_single_die_without_train_station() {
        let mut state = veteran_state(2);
        let mut rng = ScriptedRandom::new(0).with_dice([1, 1]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 2 }).unwrap();

        assert_eq!(summary.roll.map(|r| r.dice_count()), Some(1));
    }

    #[test]
    fn test_city_hall_grant() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_coins(0);
        let mut rng = ScriptedRandom::new(0).with_dice([6]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 1 }).unwrap();

        assert!(summary.city_hall);
        assert_eq!(state.player(P0).coins(), 1);
    }

    #[test]
    fn test_radio_tower_reroll() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_landmark(Card::RadioTower, true).unwrap();
        let mut rng = ScriptedRandom::new(0).with_dice([6, 2]).with_flips([true]);
        let mut policy = RandomPolicy::new();

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut policy).unwrap();

        assert!(summary.rerolled);
        assert_eq!(summary.roll, Some(DiceRoll::single(2)));
    }

    #[test]
    fn test_amusement_park_extra_turn() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_landmark(Card::TrainStation, true).unwrap();
        state.player_mut(P0).set_landmark(Card::AmusementPark, true).unwrap();
        let mut rng = ScriptedRandom::new(0).with_dice([3, 3]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 2 }).unwrap();

        assert!(summary.extra_turn);
        assert_eq!(state.current_player, P0);
    }

    #[test]
    fn test_doubles_without_amusement_park() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_landmark(Card::TrainStation, true).unwrap();
        let mut rng = ScriptedRandom::new(0).with_dice([3, 3]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 2 }).unwrap();

        assert!(!summary.extra_turn);
        assert_eq!(state.current_player, P1);
    }

    #[test]
    fn test_airport_bonus_when_nothing_bought() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_landmark(Card::Airport, true).unwrap();
        let mut rng = ScriptedRandom::new(0).with_dice([5]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 1 }).unwrap();

        assert!(summary.airport_bonus);
        assert_eq!(state.player(P0).coins(), 13);
    }

    #[test]
    fn test_purchase_and_no_airport_bonus() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_landmark(Card::Airport, true).unwrap();
        // roll 5, then buy the first legal card (wheat field)
        let mut rng = ScriptedRandom::new(0).with_dice([5]).with_indices([0]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut RandomPolicy::new()).unwrap();

        assert_eq!(summary.purchase, Some(Card::WheatField));
        assert!(!summary.airport_bonus);
        assert_eq!(state.player(P0).establishment(Card::WheatField), EstablishmentCount::working(2));
        assert_eq!(state.player(P0).coins(), 2);
    }

    #[test]
    fn test_tech_startup_investment() {
        let mut state = veteran_state(2);
        state.player_mut(P0).set_major(Card::TechStartup, true).unwrap();
        let mut rng = ScriptedRandom::new(0).with_dice([5]).with_indices([0]).with_flips([true]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut RandomPolicy::new()).unwrap();

        assert!(summary.invested);
        assert_eq!(state.player(P0).invested(), 1);
        assert_eq!(state.player(P0).coins(), 1);
    }

    #[test]
    fn test_winner_reported() {
        let mut state = veteran_state(2);
        for card in Card::LANDMARKS {
            state.player_mut(P1).set_landmark(card, true).unwrap();
        }
        let mut rng = ScriptedRandom::new(0).with_dice([5]);

        let summary = TurnEngine::take_turn(&mut state, &mut rng, &mut Passive { dice: 1 }).unwrap();

        assert_eq!(summary.winner, Some(P1));
        assert!(matches!(state.events.iter().last(), Some(GameEvent::GameWon { .. })));
    }
}
