//! Fundamental geometric and simulation types.
//!
//! World space is right-handed with `y` up. A yaw of zero faces `-z`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::DIRECTION_EPSILON;

/// Direction used when a requested direction has no length.
pub const DEFAULT_FORWARD: Vec3 = Vec3::NEG_Z;

/// Position and heading of a simulated body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the vertical axis (radians).
    pub yaw: f32,
}

/// Linear velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced time.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Turn to face along `direction` on the horizontal plane.
    /// Leaves the heading untouched for vertical or zero directions.
    pub fn face(&mut self, direction: Vec3) {
        let flat = Vec3::new(direction.x, 0.0, direction.z);
        if flat.length_squared() > DIRECTION_EPSILON * DIRECTION_EPSILON {
            self.yaw = yaw_of(flat);
        }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Normalize `v`, substituting `fallback` when `v` has (almost) no length.
pub fn safe_normalize(v: Vec3, fallback: Vec3) -> Vec3 {
    let len = v.length();
    if len <= DIRECTION_EPSILON || !len.is_finite() {
        fallback
    } else {
        v / len
    }
}

/// Heading of a direction: 0 = `-z`, positive turns toward `+x`.
pub fn yaw_of(direction: Vec3) -> f32 {
    direction.x.atan2(-direction.z)
}

/// Unit view direction for a yaw/pitch pair.
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}
