//! End-to-end scenarios for single rolls and turns.

mod common;

use machi_koro::cards::Card;
use machi_koro::core::{EstablishmentCount, GameConfig, GameState, PlayerId, ScriptedRandom};
use machi_koro::events::GameEvent;
use machi_koro::game::MachiKoroGame;
use machi_koro::rules::{ActivationEngine, DiceRoll};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

fn new_state(players: usize) -> GameState {
    GameState::new(&GameConfig::new(players)).unwrap()
}

/// A forced roll of 2 activates the acting player's bakery, then the turn
/// continues into purchasing.
#[test]
fn test_bakery_roll_then_purchase() {
    common::init_logging();
    let rng = ScriptedRandom::new(0).with_dice([2]).with_indices([0]);
    let mut game = MachiKoroGame::with_rng(GameConfig::new(2), rng).unwrap();
    game.state_mut().player_mut(P0).is_first_turn = false;

    let summary = game.take_turn().unwrap();

    assert_eq!(summary.roll, Some(DiceRoll::single(2)));
    assert_eq!(summary.purchase, Some(Card::WheatField));
    // 3 + 1 from the bakery - 1 for the wheat field
    assert_eq!(game.state().player(P0).coins(), 3);
    assert_eq!(game.state().player(P1).coins(), 3);

    let events: Vec<_> = game.drain_events();
    let income = events
        .iter()
        .position(|e| *e == GameEvent::Income { player: P0, card: Card::Bakery, amount: 1 })
        .unwrap();
    let purchase = events
        .iter()
        .position(|e| matches!(e, GameEvent::Purchased { player, .. } if *player == P0))
        .unwrap();
    assert!(income < purchase);
}

/// Stadium collects from each opponent, clamped to what they have.
#[test]
fn test_stadium_collects_clamped() {
    common::init_logging();
    let mut state = new_state(3);
    state.player_mut(P0).set_major(Card::Stadium, true).unwrap();
    state.player_mut(P1).set_coins(5);
    state.player_mut(P2).set_coins(1);
    let mut rng = ScriptedRandom::new(0);

    ActivationEngine::activate(&mut state, &mut rng, P0, 6).unwrap();

    assert_eq!(state.player(P1).coins(), 3);
    assert_eq!(state.player(P2).coins(), 0);
    assert_eq!(state.player(P0).coins(), 6);

    let payers: Vec<_> = state
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Payment { from, card: Card::Stadium, amount, .. } => Some((*from, *amount)),
            _ => None,
        })
        .collect();
    assert_eq!(payers, vec![(P2, 1), (P1, 2)]);
}

/// Park evens out every balance, rounding up.
#[test]
fn test_park_redistributes() {
    common::init_logging();
    let mut state = new_state(3);
    state.player_mut(P0).set_major(Card::Park, true).unwrap();
    for (id, coins) in [(P0, 10), (P1, 4), (P2, 1)] {
        state.player_mut(id).set_coins(coins);
    }
    let mut rng = ScriptedRandom::new(0);

    ActivationEngine::activate(&mut state, &mut rng, P0, 11).unwrap();

    for player in state.players() {
        assert_eq!(player.coins(), 5);
    }
    assert!(state
        .events
        .iter()
        .any(|e| *e == GameEvent::CoinsRedistributed { total: 15, per_player: 5 }));
}

/// Demolition takes down the cheapest owned landmark and returns it to
/// the market.
#[test]
fn test_demolition_removes_cheapest_landmark() {
    common::init_logging();
    let mut state = new_state(2);
    let player = state.player_mut(P0);
    player.add_units(Card::DemolitionCompany, EstablishmentCount::working(1)).unwrap();
    player.set_landmark(Card::TrainStation, true).unwrap();
    player.set_landmark(Card::ShoppingMall, true).unwrap();
    let train_stock = state.market.stock(Card::TrainStation);
    let mall_stock = state.market.stock(Card::ShoppingMall);
    let mut rng = ScriptedRandom::new(0);

    ActivationEngine::activate(&mut state, &mut rng, P0, 4).unwrap();

    let player = state.player(P0);
    assert!(!player.owns_landmark(Card::TrainStation));
    assert!(player.owns_landmark(Card::ShoppingMall));
    assert_eq!(player.coins(), 11);
    assert_eq!(state.market.stock(Card::TrainStation), train_stock + 1);
    assert_eq!(state.market.stock(Card::ShoppingMall), mall_stock);
}

/// A renovated restaurant reopens instead of charging.
#[test]
fn test_renovated_restaurant_reopens() {
    common::init_logging();
    let mut state = new_state(2);
    state
        .player_mut(P1)
        .add_units(Card::Cafe, EstablishmentCount::new(0, 2))
        .unwrap();
    let mut rng = ScriptedRandom::new(0);

    ActivationEngine::activate(&mut state, &mut rng, P0, 3).unwrap();
    assert_eq!(state.player(P1).coins(), 3);
    assert_eq!(state.player(P1).establishment(Card::Cafe), EstablishmentCount::working(2));

    ActivationEngine::activate(&mut state, &mut rng, P0, 3).unwrap();
    assert_eq!(state.player(P1).coins(), 5);
}

/// The renovation company closes a building, which then skips one
/// matching roll.
#[test]
fn test_renovation_cycle() {
    common::init_logging();
    let mut state = new_state(2);
    state.player_mut(P0).set_major(Card::RenovationCompany, true).unwrap();
    state.player_mut(P0).set_coins(0);
    // buildings in play: wheat_field, bakery
    let mut rng = ScriptedRandom::new(0).with_indices([0]);

    ActivationEngine::activate(&mut state, &mut rng, P0, 8).unwrap();
    for player in state.players() {
        assert_eq!(player.establishment(Card::WheatField), EstablishmentCount::new(0, 1));
    }

    // the closed field reopens instead of paying
    ActivationEngine::activate(&mut state, &mut rng, P1, 1).unwrap();
    assert_eq!(state.player(P0).coins(), 0);
    assert_eq!(state.player(P0).establishment(Card::WheatField), EstablishmentCount::working(1));

    ActivationEngine::activate(&mut state, &mut rng, P1, 1).unwrap();
    assert_eq!(state.player(P0).coins(), 1);
}

/// A broke player pays nothing to restaurants and receives the city hall
/// coin before buying.
#[test]
fn test_broke_player_turn() {
    common::init_logging();
    let rng = ScriptedRandom::new(0).with_dice([3]);
    let mut game = MachiKoroGame::with_rng(GameConfig::new(2), rng)
        .unwrap()
        .with_policy(common::IdlePolicy::default());
    {
        let state = game.state_mut();
        state.player_mut(P0).is_first_turn = false;
        state.player_mut(P0).set_coins(0);
        state.player_mut(P1).add_units(Card::Cafe, EstablishmentCount::working(1)).unwrap();
    }

    let summary = game.take_turn().unwrap();

    // the bakery pays after restaurants, so the cafe got nothing
    assert_eq!(game.state().player(P1).coins(), 3);
    assert_eq!(game.state().player(P0).coins(), 1);
    assert!(!summary.city_hall);
}
