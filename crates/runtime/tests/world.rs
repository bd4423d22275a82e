use undead_content::{LevelGenerator, builtin_level};
use undead_core::{AgentKind, AiConfig, LevelOracle, TilePos};
use undead_runtime::{Roster, World};

fn builtin_world(number: usize, seed: u64) -> (World, undead_core::Point) {
    let config = AiConfig::default();
    let layout = builtin_level(number, &config).unwrap();
    let target = layout.player_center();
    let world = World::from_layout(layout, Roster::for_level(number), config, seed).unwrap();
    (world, target)
}

#[test]
fn builtin_levels_spawn_their_fixed_starts() {
    for (number, expected) in [(1, 5), (2, 8), (3, 12)] {
        let (world, _) = builtin_world(number, 1);
        assert_eq!(world.agents().len(), expected, "level {number}");
    }

    let (world, _) = builtin_world(1, 1);
    let mummies = world
        .agents()
        .iter()
        .filter(|agent| agent.kind() == AgentKind::Mummy)
        .count();
    assert_eq!(mummies, 1);
}

#[test]
fn generated_levels_use_roster_and_planner() {
    let config = AiConfig::default();
    let layout = LevelGenerator::new(25, 20, config.tile_size).generate(11).unwrap();
    let player = layout.player_start;
    let roster = Roster::for_level(4);

    let world = World::from_layout(layout, roster, config, 11).unwrap();

    let zombies = world.agents().iter().filter(|a| a.kind() == AgentKind::Zombie).count();
    let mummies = world.agents().iter().filter(|a| a.kind() == AgentKind::Mummy).count();
    assert_eq!((zombies, mummies), (6, 2));
    for agent in world.agents() {
        let tile = world.level().tile_of(agent.position());
        let (dx, dy) = ((tile.x - player.x) as f32, (tile.y - player.y) as f32);
        assert!((dx * dx + dy * dy).sqrt() >= 5.0, "{tile:?} too close to the player");
    }
}

#[test]
fn agents_never_enter_blocked_tiles() {
    let (mut world, target) = builtin_world(3, 7);

    for _ in 0..400 {
        world.tick(target);
        for agent in world.agents() {
            assert!(
                !world.level().is_region_blocked(agent.bounds()),
                "agent {} inside a wall at {:?}",
                agent.id(),
                agent.position()
            );
        }
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let run = |seed| {
        let (mut world, target) = builtin_world(2, seed);
        for _ in 0..300 {
            world.tick(target);
        }
        world.snapshots()
    };

    assert_eq!(run(5), run(5));
}

#[test]
fn mummy_in_sight_closes_in() {
    // Level 3 puts a mummy six tiles down the open row the player starts on.
    let (mut world, target) = builtin_world(3, 3);
    let mummy = world
        .agents()
        .iter()
        .find(|agent| {
            agent.kind() == AgentKind::Mummy
                && world.level().tile_of(agent.position()) == TilePos::new(6, 9)
        })
        .map(|agent| agent.id())
        .unwrap();
    let start = world.agent(mummy).unwrap().center().distance(target);

    let report = world.tick(target);
    assert!(report.chasing > 0);
    for _ in 0..99 {
        world.tick(target);
    }

    let agent = world.agent(mummy).unwrap();
    assert!(agent.perception().target_visible);
    assert!(agent.center().distance(target) < start - 90.0);
}

#[test]
fn lifecycle_damage_then_remove() {
    let (mut world, _) = builtin_world(1, 1);
    let ids: Vec<_> = world.agents().iter().map(|agent| agent.id()).collect();

    for id in &ids {
        world.damage(*id, 2).unwrap();
    }
    let removed = world.remove_dead();

    assert_eq!(removed, ids);
    assert!(world.agents().is_empty());
    assert_eq!(world.tick(world.level().tile_center(TilePos::new(1, 1))).agents, 0);
}

#[test]
fn snapshots_serialize_for_logging() {
    let (mut world, target) = builtin_world(1, 1);
    world.tick(target);

    let json = serde_json::to_value(world.snapshots()).unwrap();
    let first = &json[0];
    assert_eq!(first["kind"], "zombie");
    assert_eq!(first["id"], 1);
    assert!(first["position"]["x"].is_number());
}
