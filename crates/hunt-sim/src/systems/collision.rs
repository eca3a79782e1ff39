//! Collision system: feeds live projectiles and hostiles to the resolver and
//! writes the resulting hit points back.

use hecs::{Entity, World};

use hunt_core::components::{Health, Hostile, Projectile};
use hunt_core::constants::{HIT_RADIUS, PROJECTILE_DAMAGE};
use hunt_core::types::Transform;

use crate::collision::{resolve, CollisionOutcome, ProjectileProbe, TargetProbe};

/// Resolve this tick's hits. Probes are ordered by entity bits so the
/// "first target found" rule is deterministic.
pub fn run(world: &mut World) -> CollisionOutcome<Entity> {
    let mut projectiles: Vec<ProjectileProbe<Entity>> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(id, (_, transform))| ProjectileProbe {
            id,
            position: transform.position,
        })
        .collect();

    let mut targets: Vec<TargetProbe<Entity>> = world
        .query::<(&Hostile, &Transform, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.is_alive())
        .map(|(id, (_, transform, health))| TargetProbe {
            id,
            position: transform.position,
            hit_points: health.hit_points,
        })
        .collect();

    if projectiles.is_empty() || targets.is_empty() {
        return CollisionOutcome::default();
    }

    projectiles.sort_by_key(|p| p.id.to_bits());
    targets.sort_by_key(|t| t.id.to_bits());

    let outcome = resolve(&projectiles, &mut targets, HIT_RADIUS, PROJECTILE_DAMAGE);

    for hit in &outcome.hits {
        if let Ok(mut health) = world.get::<&mut Health>(hit.target) {
            health.hit_points = health.hit_points.min(hit.remaining);
        }
    }

    outcome
}
