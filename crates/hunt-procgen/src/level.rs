//! Level generator: one spawn room at the origin plus peripheral rooms at
//! fixed directional offsets with randomized extents.

use glam::Vec3;
use rand::Rng;

use hunt_core::constants::*;
use hunt_core::level::{LevelGraph, Room};

/// Generate a level with `peripheral_rooms` populated rooms.
///
/// `peripheral_rooms` is capped at the number of available directions;
/// callers are expected to have validated it already.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, peripheral_rooms: usize) -> LevelGraph {
    let mut rooms = Vec::with_capacity(peripheral_rooms + 1);
    rooms.push(spawn_room());

    for offset in ROOM_OFFSETS.iter().take(peripheral_rooms) {
        rooms.push(Room {
            center: Vec3::from_array(*offset),
            width: rng.gen_range(ROOM_WIDTH_MIN..=ROOM_WIDTH_MAX),
            height: rng.gen_range(ROOM_HEIGHT_MIN..=ROOM_HEIGHT_MAX),
            depth: rng.gen_range(ROOM_DEPTH_MIN..=ROOM_DEPTH_MAX),
            has_entities: true,
        });
    }

    tracing::debug!(rooms = rooms.len(), "generated level");
    LevelGraph { rooms }
}

/// The unpopulated room the player starts in.
fn spawn_room() -> Room {
    let [width, height, depth] = SPAWN_ROOM_EXTENTS;
    Room {
        center: Vec3::ZERO,
        width,
        height,
        depth,
        has_entities: false,
    }
}
