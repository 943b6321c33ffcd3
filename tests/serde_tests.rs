//! Serialization of configuration, snapshots and event streams.

mod common;

use machi_koro::cards::Card;
use machi_koro::core::{EstablishmentCount, GameConfig, Player, PlayerId, DEFAULT_MAX_TURNS};
use machi_koro::events::{EventLog, GameEvent};
use machi_koro::game::MachiKoroGame;
use machi_koro::market::Market;
use machi_koro::rules::TurnSummary;

#[test]
fn test_config_round_trip() {
    let config = GameConfig::new(4)
        .with_starting_coins(7)
        .with_max_turns(500)
        .with_all_buildings(EstablishmentCount::new(1, 1));

    let json = serde_json::to_string(&config).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{"player_count": 3, "starting_coins": 10}"#).unwrap();

    assert_eq!(config.player_count, 3);
    assert_eq!(config.starting_coins, 10);
    assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
    assert_eq!(
        config.starting_establishments.get(&Card::WheatField),
        Some(&EstablishmentCount::working(1))
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_card_names() {
    let json = r#"{
        "player_count": 2,
        "starting_establishments": {"ranch": {"working": 2, "on_renovation": 1}},
        "starting_major_establishments": ["tv_station"]
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    let game = MachiKoroGame::new(config, 0).unwrap();
    let player = game.state().player(PlayerId::new(1));

    assert_eq!(player.establishment(Card::Ranch), EstablishmentCount::new(2, 1));
    assert!(!player.holds(Card::WheatField));
    assert!(player.owns_major(Card::TvStation));
    assert_eq!(game.state().market.stock(Card::TvStation), 0);
}

#[test]
fn test_unknown_card_rejected() {
    let result = serde_json::from_str::<GameConfig>(r#"{"starting_major_establishments": ["castle"]}"#);
    assert!(result.is_err());
}

#[test]
fn test_player_and_market_snapshot() {
    let mut game = MachiKoroGame::new(GameConfig::new(3), 21).unwrap().without_events();
    for _ in 0..30 {
        game.take_turn().unwrap();
    }
    let state = game.state();

    let players: Vec<Player> = state.players().cloned().collect();
    let json = serde_json::to_string(&players).unwrap();
    let back: Vec<Player> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, players);

    let json = serde_json::to_string(&state.market).unwrap();
    let back: Market = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state.market);
}

#[test]
fn test_turn_summaries_serialize() {
    let mut game = MachiKoroGame::new(GameConfig::new(2), 4).unwrap();
    let summaries: Vec<TurnSummary> = (0..10).map(|_| game.take_turn().unwrap()).collect();

    let json = serde_json::to_string(&summaries).unwrap();
    let back: Vec<TurnSummary> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, summaries);
    assert!(back[0].roll.is_none());
    assert!(back[2].roll.is_some());
}

#[test]
fn test_event_stream_round_trip() {
    common::init_logging();
    let mut game = MachiKoroGame::new(GameConfig::new(2), 8).unwrap();
    for _ in 0..12 {
        game.take_turn().unwrap();
    }

    let log: &EventLog = game.events();
    let json = serde_json::to_string(log).unwrap();
    let back: EventLog = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, log);

    let value = serde_json::to_value(log.iter().next().unwrap()).unwrap();
    assert_eq!(value["kind"], "turn_started");

    let turns = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::TurnStarted { .. }))
        .count();
    assert_eq!(turns, 12);
}
