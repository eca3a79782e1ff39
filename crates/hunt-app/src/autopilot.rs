//! Input sources for the headless runner.
//!
//! The autopilot picks the nearest live hostile from the last snapshot, turns
//! toward it at a bounded rate, walks in until it is within a standoff range
//! and fires on a fixed cadence whenever its aim is on target.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use hunt_core::commands::PlayerInput;
use hunt_core::constants::DIRECTION_EPSILON;
use hunt_core::state::{HostileView, HuntSnapshot};
use hunt_core::types::yaw_of;

/// Largest view rotation per tick, radians.
const MAX_TURN_PER_TICK: f32 = 0.12;
/// Both aim errors must be under this to fire, radians.
const AIM_TOLERANCE: f32 = 0.01;
/// Walk only while roughly facing the target.
const WALK_TOLERANCE: f32 = 0.5;
/// Stop closing in at this distance.
const STANDOFF_RANGE: f32 = 6.0;
/// Ticks between shots.
const FIRE_INTERVAL_TICKS: u32 = 8;

/// Produces the player input for each tick.
pub trait InputSource {
    /// Input for the next tick, given the last snapshot the loop produced.
    fn sample(&mut self, last: Option<&HuntSnapshot>) -> PlayerInput;
}

/// Stands still and never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl InputSource for Idle {
    fn sample(&mut self, _last: Option<&HuntSnapshot>) -> PlayerInput {
        PlayerInput::default()
    }
}

/// Hunts the nearest hostile.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Radians per unit of look delta; must match the engine's tuning.
    look_sensitivity: f32,
    cooldown: u32,
}

impl Autopilot {
    pub fn new(look_sensitivity: f32) -> Self {
        Self {
            look_sensitivity,
            cooldown: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, last: Option<&HuntSnapshot>) -> PlayerInput {
        self.cooldown = self.cooldown.saturating_sub(1);

        let Some(snapshot) = last else {
            return PlayerInput::default();
        };
        let Some(target) = nearest_hostile(snapshot) else {
            return PlayerInput::default();
        };

        let player = &snapshot.player;
        let offset = target.position - player.position;
        let distance = offset.length();
        if distance < DIRECTION_EPSILON {
            return PlayerInput::default();
        }
        let direction = offset / distance;

        let yaw_error = wrap_angle(yaw_of(direction) - player.yaw);
        let pitch_error = direction.y.clamp(-1.0, 1.0).asin() - player.pitch;
        let turn = Vec2::new(
            yaw_error.clamp(-MAX_TURN_PER_TICK, MAX_TURN_PER_TICK),
            pitch_error.clamp(-MAX_TURN_PER_TICK, MAX_TURN_PER_TICK),
        );

        let on_target = yaw_error.abs() < AIM_TOLERANCE && pitch_error.abs() < AIM_TOLERANCE;
        let fire_requested = on_target && self.cooldown == 0;
        if fire_requested {
            self.cooldown = FIRE_INTERVAL_TICKS;
        }

        let walk = distance > STANDOFF_RANGE && yaw_error.abs() < WALK_TOLERANCE;

        PlayerInput {
            move_vector: Vec2::new(0.0, if walk { 1.0 } else { 0.0 }),
            look_delta: turn / self.look_sensitivity,
            fire_requested,
        }
    }
}

fn nearest_hostile(snapshot: &HuntSnapshot) -> Option<&HostileView> {
    let eye = snapshot.player.position;
    snapshot.hostiles.iter().min_by(|a, b| {
        a.position
            .distance_squared(eye)
            .total_cmp(&b.position.distance_squared(eye))
    })
}

/// Wrap to `[-PI, PI)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
