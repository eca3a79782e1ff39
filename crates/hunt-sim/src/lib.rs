//! Simulation engine for the hunt.
//!
//! Owns the hecs ECS world, runs steering, projectile, collision and scoring
//! systems once per frame, and produces `HuntSnapshot`s for presentation.

pub mod collision;
pub mod engine;
pub mod player;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::HuntEngine;
pub use hunt_core as core;

#[cfg(test)]
mod tests;
