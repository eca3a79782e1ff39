//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::{Transform, Velocity};

/// Marks a hostile entity and names its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: EntityKind,
    /// Index of the room the entity was spawned in.
    pub room: usize,
}

/// Remaining hit points. Zero means dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hit_points: u32,
}

/// Wander bookkeeping carried by every hostile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WanderState {
    /// Current wander destination, if one has been chosen.
    pub target: Option<Vec3>,
    /// Seconds until a new destination is chosen.
    pub retarget_in: f32,
}

/// A player-fired projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Vec3,
    pub speed: f32,
    /// Simulation time at which the projectile was fired.
    pub spawned_at: f64,
}

/// A freshly spawned hostile before it is inserted into the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityInstance {
    pub hostile: Hostile,
    pub transform: Transform,
    pub health: Health,
    pub velocity: Velocity,
    pub wander: WanderState,
}

impl Health {
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Apply damage, saturating at zero. Returns true if this hit was lethal.
    pub fn damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.hit_points = self.hit_points.saturating_sub(amount);
        was_alive && !self.is_alive()
    }
}

impl EntityInstance {
    /// Component bundle ready for `World::spawn`.
    pub fn into_bundle(self) -> (Hostile, Transform, Health, Velocity, WanderState) {
        (
            self.hostile,
            self.transform,
            self.health,
            self.velocity,
            self.wander,
        )
    }
}
