//! Procedural content for the hunt: level layout and hostile placement.
//!
//! Everything here is a pure function of the RNG handed in, so a seeded RNG
//! reproduces the same level and population.

pub mod level;
pub mod spawner;

pub use hunt_core as core;
pub use level::generate;
pub use spawner::{populate, spawn, SpawnRules};
