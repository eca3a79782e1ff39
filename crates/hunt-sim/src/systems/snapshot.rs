//! Snapshot system: queries the ECS world and builds a complete HuntSnapshot.
//!
//! Read-only; never modifies the world.

use hecs::World;

use hunt_core::components::{Health, Hostile, Projectile};
use hunt_core::enums::HuntPhase;
use hunt_core::events::HuntEvent;
use hunt_core::level::LevelGraph;
use hunt_core::state::*;
use hunt_core::types::{SimTime, Transform};

use crate::player::Player;
use crate::scoring::ScoreState;

/// Build a complete HuntSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: HuntPhase,
    score: &ScoreState,
    player: &Player,
    level: &LevelGraph,
    events: Vec<HuntEvent>,
) -> HuntSnapshot {
    HuntSnapshot {
        time: *time,
        phase,
        score: score.view(),
        player: player.view(),
        rooms: level.rooms.clone(),
        hostiles: build_hostiles(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Live hostiles, ordered by id.
fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut hostiles: Vec<HostileView> = world
        .query::<(&Hostile, &Transform, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.is_alive())
        .map(|(entity, (hostile, transform, health))| HostileView {
            id: entity.to_bits().get(),
            kind: hostile.kind,
            position: transform.position,
            yaw: transform.yaw,
            hit_points: health.hit_points,
            scale: hostile.kind.profile().scale,
        })
        .collect();

    hostiles.sort_by_key(|h| h.id);
    hostiles
}

/// Live projectiles, ordered by id.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(entity, (projectile, transform))| ProjectileView {
            id: entity.to_bits().get(),
            position: transform.position,
            direction: projectile.direction,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
