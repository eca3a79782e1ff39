//! Hostile AI for the hunt.
//!
//! Implements the wander and pursue steering behaviors.

pub mod steering;

pub use hunt_core as core;
