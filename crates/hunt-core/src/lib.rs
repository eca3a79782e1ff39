//! Core types and definitions for the hunt simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, level geometry, entity profiles, input, commands, events,
//! snapshots, configuration and constants. It has no dependency on any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod profiles;
pub mod state;
pub mod types;
