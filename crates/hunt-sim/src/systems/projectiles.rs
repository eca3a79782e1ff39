//! Projectile system: spawns, moves and expires player projectiles.

use glam::Vec3;
use hecs::{Entity, World};

use hunt_core::components::Projectile;
use hunt_core::constants::{PROJECTILE_LIFETIME_SECS, PROJECTILE_SPEED, TIME_EPSILON};
use hunt_core::types::{safe_normalize, Transform, DEFAULT_FORWARD};

/// Build a projectile travelling along `look_direction`. A degenerate
/// direction fires straight ahead.
pub fn make_projectile(look_direction: Vec3, now: f64) -> Projectile {
    Projectile {
        direction: safe_normalize(look_direction, DEFAULT_FORWARD),
        speed: PROJECTILE_SPEED,
        spawned_at: now,
    }
}

/// Spawn a projectile at `origin`. Always succeeds.
pub fn fire(world: &mut World, origin: Vec3, look_direction: Vec3, now: f64) -> Entity {
    let projectile = make_projectile(look_direction, now);
    let mut transform = Transform::at(origin);
    transform.face(projectile.direction);
    world.spawn((projectile, transform))
}

/// Whether a projectile fired at `spawned_at` has outlived its lifetime.
pub fn is_expired(projectile: &Projectile, now: f64) -> bool {
    now - projectile.spawned_at + TIME_EPSILON >= PROJECTILE_LIFETIME_SECS
}

/// Advance every projectile by `dt`, then despawn the expired ones.
/// `now` is the simulation time at the end of this tick.
pub fn run(world: &mut World, dt: f32, now: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (projectile, transform)) in world.query_mut::<(&Projectile, &mut Transform)>() {
        transform.position += projectile.direction * projectile.speed * dt;
        if is_expired(projectile, now) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
