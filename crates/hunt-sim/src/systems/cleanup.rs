//! Cleanup system: removes consumed projectiles and dead hostiles.

use hecs::{Entity, World};

use hunt_core::components::{Health, Hostile};

/// Despawn `consumed` projectiles and every hostile at zero hit points.
/// Removals are collected first and applied in a single pass, so duplicate
/// marks are harmless.
pub fn run(world: &mut World, consumed: &[Entity], despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend_from_slice(consumed);

    for (entity, (_hostile, health)) in world.query_mut::<(&Hostile, &Health)>() {
        if !health.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    despawn_buffer.sort_unstable_by_key(|e| e.to_bits());
    despawn_buffer.dedup();

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
