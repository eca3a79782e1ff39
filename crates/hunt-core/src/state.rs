//! Hunt state snapshot: the read-only view handed to presentation each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, HuntPhase};
use crate::events::HuntEvent;
use crate::level::Room;
use crate::types::SimTime;

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HuntSnapshot {
    pub time: SimTime,
    pub phase: HuntPhase,
    pub score: ScoreView,
    pub player: PlayerView,
    pub rooms: Vec<Room>,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<HuntEvent>,
}

/// Score and progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    /// Running score (may exceed the reporting cap).
    pub score: u32,
    pub killed: u32,
    pub total: u32,
    pub complete: bool,
    /// Clamped score reported at completion.
    pub final_score: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// A live hostile ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostileView {
    /// Stable id for the lifetime of the entity.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec3,
    pub yaw: f32,
    pub hit_points: u32,
    pub scale: f32,
}

/// A live projectile ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec3,
    pub direction: Vec3,
}
