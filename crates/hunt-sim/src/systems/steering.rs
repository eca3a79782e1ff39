//! Steering system: runs the steering controller for every live hostile.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use hunt_core::components::{Health, Hostile, WanderState};
use hunt_core::types::{Transform, Velocity};

use hunt_ai::steering::{step, SteeringContext};

/// Steer and move every hostile with hit points left. Dead hostiles are
/// left untouched.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, player_position: Vec3, dt: f32) {
    for (_entity, (hostile, health, transform, velocity, wander)) in world.query_mut::<(
        &Hostile,
        &Health,
        &mut Transform,
        &mut Velocity,
        &mut WanderState,
    )>() {
        if !health.is_alive() {
            continue;
        }

        let ctx = SteeringContext {
            kind: hostile.kind,
            position: transform.position,
            velocity: velocity.0,
            wander: *wander,
            player_position,
            dt,
        };

        let update = step(&ctx, rng);
        transform.position = update.position;
        transform.face(update.velocity);
        velocity.0 = update.velocity;
        *wander = update.wander;
    }
}
