//! Player input and control commands sent to the simulation.
//!
//! Input is sampled once per tick as an immutable snapshot. Commands are
//! queued and applied at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One tick's worth of player input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Strafe on `x` (+ right), advance on `y` (+ forward).
    pub move_vector: Vec2,
    /// Look rotation: `x` turns right, `y` looks up. Raw device units.
    pub look_delta: Vec2,
    pub fire_requested: bool,
}

/// Control actions for the hunt lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HuntCommand {
    /// Generate a level and begin hunting (from `Idle` only).
    Start,
    Pause,
    Resume,
    /// Throw away the current level and start a new one.
    Restart,
}

impl PlayerInput {
    /// Input that only pulls the trigger.
    pub fn fire() -> Self {
        Self {
            fire_requested: true,
            ..Self::default()
        }
    }
}
