//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only work). They hold no state of their own; it lives in components
//! or in the engine.

pub mod cleanup;
pub mod collision;
pub mod projectiles;
pub mod snapshot;
pub mod steering;
