//! Entity spawner: populates a flagged room with hostiles.

use std::ops::RangeInclusive;

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

use hunt_core::components::{EntityInstance, Health, Hostile, WanderState};
use hunt_core::constants::*;
use hunt_core::enums::EntityKind;
use hunt_core::level::{LevelGraph, Room};
use hunt_core::types::{Transform, Velocity};

/// What the spawner may place and how many per room.
#[derive(Debug, Clone)]
pub struct SpawnRules {
    pub roster: Vec<EntityKind>,
    pub per_room: RangeInclusive<u32>,
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            roster: EntityKind::ALL.to_vec(),
            per_room: ENTITIES_PER_ROOM_MIN..=ENTITIES_PER_ROOM_MAX,
        }
    }
}

/// Spawn hostiles for one room. Unflagged rooms, an empty roster and an
/// empty `per_room` range yield nothing.
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    room: &Room,
    room_index: usize,
    rules: &SpawnRules,
) -> Vec<EntityInstance> {
    if !room.has_entities || rules.roster.is_empty() || rules.per_room.is_empty() {
        return Vec::new();
    }

    let count = rng.gen_range(rules.per_room.clone());
    let (half_x, half_z) = room.inner_half_extents(SPAWN_WALL_MARGIN);

    let mut spawned = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let Some(&kind) = rules.roster.choose(rng) else {
            break;
        };
        let position = room.center
            + Vec3::new(
                sample_symmetric(rng, half_x),
                rng.gen_range(SPAWN_HEIGHT_MIN..=SPAWN_HEIGHT_MAX),
                sample_symmetric(rng, half_z),
            );
        spawned.push(EntityInstance {
            hostile: Hostile {
                kind,
                room: room_index,
            },
            transform: Transform::at(position),
            health: Health {
                hit_points: kind.profile().hit_points,
            },
            velocity: Velocity::default(),
            wander: WanderState::default(),
        });
    }

    tracing::debug!(room = room_index, count = spawned.len(), "spawned hostiles");
    spawned
}

/// Spawn hostiles for every flagged room of a level.
pub fn populate<R: Rng + ?Sized>(
    rng: &mut R,
    level: &LevelGraph,
    rules: &SpawnRules,
) -> Vec<EntityInstance> {
    let mut spawned = Vec::new();
    for (index, room) in level.populated_rooms() {
        spawned.extend(spawn(rng, room, index, rules));
    }
    spawned
}

/// Uniform sample in `[-half, half]`, or zero for a degenerate extent.
fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}
