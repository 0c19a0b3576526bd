mod common;

use common::WorldBuilder;
use landclaim_core::scenario::ScenarioParams;
use landclaim_io::{IoError, ReplayLog};
use landclaim_lib::app;

fn builder() -> WorldBuilder {
    WorldBuilder::new().with_size(40, 40).with_players(3)
}

#[test]
fn test_generated_log_replays_to_identical_world() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json.gz");
    let config = builder().config().clone();
    let params = ScenarioParams {
        seed: 11,
        military_buildings: 48,
        removal_chance: 0.2,
    };

    let log = app::generate(&config, &params, &path).unwrap();
    let (_, expected) = landclaim_core::scenario::generate(&config, &params).unwrap();

    let world = app::run(config.clone(), &path).unwrap();
    assert_eq!(world.ownership().raw_owners(), expected.ownership().raw_owners());
    assert_eq!(world.version() as usize, log.events.len());

    let outcome = app::verify(config, &path).unwrap();
    assert!(outcome.is_consistent());
    assert_eq!(outcome.events, log.events.len());
}

#[test]
fn test_log_refuses_other_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let config = builder().config().clone();
    app::generate(&config, &ScenarioParams::default(), &path).unwrap();

    let other = builder()
        .with_config(|c| c.buildings.fortress_radius = 4)
        .config()
        .clone();
    let err = landclaim_io::load_world(&path, other).err().unwrap();
    assert!(matches!(err, IoError::ConfigMismatch { .. }));
    assert!(app::run(builder().config().clone(), &path).is_ok());
}

#[test]
fn test_stats_cover_every_active_player() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let config = builder().config().clone();
    let log = app::generate(&config, &ScenarioParams::default(), &path).unwrap();
    let loaded = ReplayLog::load(&path).unwrap();
    assert_eq!(loaded.events, log.events);

    let world = loaded.rebuild(config).unwrap();
    let stats = app::player_stats(&world);
    assert_eq!(stats.len(), 3);
    let owned: usize = stats.iter().map(|s| s.territory).sum();
    assert_eq!(owned, world.ownership().iter().filter(|(_, o)| o.is_some()).count());
    assert!(stats.iter().all(|s| s.border <= s.territory));
}
