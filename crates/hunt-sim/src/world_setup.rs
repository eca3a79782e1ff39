//! Level and population setup for a new hunt.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use hunt_core::config::HuntConfig;
use hunt_core::level::LevelGraph;

use hunt_procgen::SpawnRules;

/// Generate a level from `rng` and spawn its hostiles into `world`.
/// Returns the level and the number of hostiles spawned.
pub fn setup_hunt(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &HuntConfig,
) -> (LevelGraph, u32) {
    world.clear();

    let level = hunt_procgen::generate(rng, config.peripheral_rooms);
    let rules = SpawnRules {
        roster: config.roster.clone(),
        per_room: config.min_entities_per_room..=config.max_entities_per_room,
    };

    let mut total_spawned = 0u32;
    for instance in hunt_procgen::populate(rng, &level, &rules) {
        world.spawn(instance.into_bundle());
        total_spawned += 1;
    }

    (level, total_spawned)
}

/// Spawn a single hostile of `kind` at `position` (for tests that need
/// hand-placed targets).
#[cfg(test)]
pub fn spawn_hostile(
    world: &mut World,
    kind: hunt_core::enums::EntityKind,
    position: glam::Vec3,
) -> hecs::Entity {
    use hunt_core::components::{EntityInstance, Health, Hostile, WanderState};
    use hunt_core::types::{Transform, Velocity};

    let instance = EntityInstance {
        hostile: Hostile { kind, room: 0 },
        transform: Transform::at(position),
        health: Health {
            hit_points: kind.profile().hit_points,
        },
        velocity: Velocity::default(),
        wander: WanderState::default(),
    };
    world.spawn(instance.into_bundle())
}
