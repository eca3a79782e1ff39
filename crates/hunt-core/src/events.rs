//! Events emitted by the simulation for presentation feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HuntEvent {
    /// The player fired a projectile.
    Fired { origin: Vec3, direction: Vec3 },
    /// A projectile struck a hostile without killing it.
    Hit { kind: EntityKind, remaining: u32 },
    /// A hostile was killed.
    Killed { kind: EntityKind, points: u32 },
    /// Running score after a kill, before completion.
    ScoreUpdated { score: u32 },
    /// The completion threshold was reached. Emitted once per hunt.
    HuntComplete { final_score: u32 },
}
