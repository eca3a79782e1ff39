//! Steering controller.
//!
//! Pure functions that compute the next velocity, position and wander state
//! for one hostile from its kind's behavior and the player's position.
//! No ECS dependency; operates on plain data.

use glam::Vec3;
use rand::Rng;

use hunt_core::components::WanderState;
use hunt_core::constants::*;
use hunt_core::enums::{Behavior, EntityKind};
use hunt_core::types::{safe_normalize, DEFAULT_FORWARD};

/// Input to the steering step for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct SteeringContext {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub wander: WanderState,
    pub player_position: Vec3,
    pub dt: f32,
}

/// Output of the steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringUpdate {
    pub position: Vec3,
    pub velocity: Vec3,
    pub wander: WanderState,
    /// Which rule produced this update.
    pub mode: SteeringMode,
}

/// The rule applied on a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringMode {
    Wander,
    Pursue,
}

/// Advance one entity by `dt`.
pub fn step<R: Rng + ?Sized>(ctx: &SteeringContext, rng: &mut R) -> SteeringUpdate {
    let profile = ctx.kind.profile();

    let (velocity, wander, mode) = match profile.behavior {
        Behavior::Wander => {
            let (velocity, wander) = wander_velocity(ctx, profile.speed, rng);
            (velocity, wander, SteeringMode::Wander)
        }
        Behavior::Pursue => {
            if ctx.position.distance(ctx.player_position) < PURSUE_TRIGGER_RANGE {
                let direction = heading_to(ctx.position, ctx.player_position, ctx.velocity);
                let velocity = ctx
                    .velocity
                    .lerp(direction * profile.speed, PURSUE_SMOOTHING);
                (velocity, ctx.wander, SteeringMode::Pursue)
            } else {
                let speed = profile.speed * PURSUE_IDLE_SPEED_FACTOR;
                let (velocity, wander) = wander_velocity(ctx, speed, rng);
                (velocity, wander, SteeringMode::Wander)
            }
        }
    };

    let mut position = ctx.position + velocity * ctx.dt;
    position.y = position.y.clamp(ENTITY_MIN_Y, ENTITY_MAX_Y);

    SteeringUpdate {
        position,
        velocity,
        wander,
        mode,
    }
}

/// Wander rule: count down, retarget when due, smooth toward the target.
fn wander_velocity<R: Rng + ?Sized>(
    ctx: &SteeringContext,
    speed: f32,
    rng: &mut R,
) -> (Vec3, WanderState) {
    let mut wander = ctx.wander;
    wander.retarget_in -= ctx.dt;

    let target = match wander.target {
        Some(target) if wander.retarget_in > 0.0 => target,
        _ => {
            let target = ctx.position + random_wander_offset(rng);
            wander.target = Some(target);
            wander.retarget_in =
                rng.gen_range(WANDER_RETARGET_MIN_SECS..=WANDER_RETARGET_MAX_SECS);
            target
        }
    };

    let direction = heading_to(ctx.position, target, ctx.velocity);
    let velocity = ctx.velocity.lerp(direction * speed, WANDER_SMOOTHING);
    (velocity, wander)
}

fn random_wander_offset<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-WANDER_OFFSET_HORIZONTAL..=WANDER_OFFSET_HORIZONTAL),
        rng.gen_range(-WANDER_OFFSET_VERTICAL..=WANDER_OFFSET_VERTICAL),
        rng.gen_range(-WANDER_OFFSET_HORIZONTAL..=WANDER_OFFSET_HORIZONTAL),
    )
}

/// Unit direction from `from` to `to`. When the two coincide, keep the
/// current heading, or face forward if standing still.
fn heading_to(from: Vec3, to: Vec3, current_velocity: Vec3) -> Vec3 {
    let fallback = safe_normalize(current_velocity, DEFAULT_FORWARD);
    safe_normalize(to - from, fallback)
}
