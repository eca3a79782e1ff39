//! Headless hunt runner.
//!
//! Drives a `HuntEngine` on its own thread, fed by an input source and a
//! command channel, and keeps the latest snapshot available for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use hunt_core as core;
