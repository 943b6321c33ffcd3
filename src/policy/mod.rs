//! Player decision policies.
//!
//! The turn engine asks a `PlayerPolicy` for every decision a player
//! makes. Rules never depend on how a decision is taken:
//! - `dice_count`: one or two dice, asked only with a train station
//! - `reroll`: keep or reroll, asked only with a radio tower
//! - `choose_purchase`: what to buy from the legal set, or nothing
//! - `invest_in_startup`: add a coin to tech-startup savings
//!
//! `RandomPolicy` makes every choice at random.

use crate::cards::Card;
use crate::core::{choose, GameState, PlayerId, RandomSource};
use crate::rules::DiceRoll;

/// Decision maker for a player.
pub trait PlayerPolicy {
    /// How many dice to roll (1 or 2).
    fn dice_count(&mut self, state: &GameState, player: PlayerId, rng: &mut dyn RandomSource) -> u8;

    /// Whether to throw away `roll` and roll again.
    fn reroll(&mut self, state: &GameState, player: PlayerId, roll: &DiceRoll, rng: &mut dyn RandomSource)
        -> bool;

    /// Pick a card from `legal` (never empty), or `None` to buy nothing.
    fn choose_purchase(
        &mut self,
        state: &GameState,
        player: PlayerId,
        legal: &[Card],
        rng: &mut dyn RandomSource,
    ) -> Option<Card>;

    /// Whether to put a coin on the tech startup.
    fn invest_in_startup(&mut self, state: &GameState, player: PlayerId, rng: &mut dyn RandomSource) -> bool;
}

/// Uniformly random decisions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    /// Chance of rerolling with a radio tower.
    pub reroll_probability: f64,
    /// Chance of investing in the tech startup each turn.
    pub invest_probability: f64,
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self {
            reroll_probability: 0.5,
            invest_probability: 0.5,
        }
    }
}

impl RandomPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reroll_probability(mut self, probability: f64) -> Self {
        self.reroll_probability = probability.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_invest_probability(mut self, probability: f64) -> Self {
        self.invest_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl PlayerPolicy for RandomPolicy {
    fn dice_count(&mut self, _state: &GameState, _player: PlayerId, rng: &mut dyn RandomSource) -> u8 {
        if rng.gen_index(2) == 0 {
            1
        } else {
            2
        }
    }

    fn reroll(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _roll: &DiceRoll,
        rng: &mut dyn RandomSource,
    ) -> bool {
        rng.gen_bool(self.reroll_probability)
    }

    fn choose_purchase(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        legal: &[Card],
        rng: &mut dyn RandomSource,
    ) -> Option<Card> {
        choose(rng, legal).copied()
    }

    fn invest_in_startup(&mut self, _state: &GameState, _player: PlayerId, rng: &mut dyn RandomSource) -> bool {
        rng.gen_bool(self.invest_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, ScriptedRandom};

    #[test]
    fn test_random_policy_follows_rng() {
        let state = GameState::new(&GameConfig::new(2)).unwrap();
        let p0 = PlayerId::new(0);
        let mut rng = ScriptedRandom::new(0).with_indices([0, 1, 2]).with_flips([true, false]);
        let mut policy = RandomPolicy::new();

        assert_eq!(policy.dice_count(&state, p0, &mut rng), 1);
        assert_eq!(policy.dice_count(&state, p0, &mut rng), 2);
        assert!(policy.reroll(&state, p0, &DiceRoll::single(3), &mut rng));
        assert!(!policy.invest_in_startup(&state, p0, &mut rng));

        let legal = [Card::WheatField, Card::Ranch, Card::Bakery];
        assert_eq!(policy.choose_purchase(&state, p0, &legal, &mut rng), Some(Card::Bakery));
    }

    #[test]
    fn test_probabilities_are_clamped() {
        let policy = RandomPolicy::new().with_reroll_probability(2.0).with_invest_probability(-1.0);

        assert_eq!(policy.reroll_probability, 1.0);
        assert_eq!(policy.invest_probability, 0.0);
    }
}
