//! Hunt configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Call [`HuntConfig::validate`] before building a simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EntityKind;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    /// RNG seed. `None` draws a seed from the OS.
    pub seed: Option<u64>,
    /// Number of populated rooms around the spawn room.
    pub peripheral_rooms: usize,
    pub min_entities_per_room: u32,
    pub max_entities_per_room: u32,
    /// Kinds the spawner may choose from, uniformly.
    pub roster: Vec<EntityKind>,
    pub completion_ratio: f64,
    pub completion_bonus: u32,
    pub max_reported_score: u32,
    /// Frame deltas above this are clamped (seconds).
    pub max_frame_dt: f64,
    pub player_move_speed: f32,
    pub look_sensitivity: f32,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            seed: None,
            peripheral_rooms: ROOM_OFFSETS.len(),
            min_entities_per_room: ENTITIES_PER_ROOM_MIN,
            max_entities_per_room: ENTITIES_PER_ROOM_MAX,
            roster: EntityKind::ALL.to_vec(),
            completion_ratio: COMPLETION_RATIO,
            completion_bonus: COMPLETION_BONUS,
            max_reported_score: MAX_REPORTED_SCORE,
            max_frame_dt: MAX_FRAME_DT,
            player_move_speed: PLAYER_MOVE_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl HuntConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a JSON document. The result is validated.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file. The result is validated.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.peripheral_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        if self.peripheral_rooms > ROOM_OFFSETS.len() {
            return Err(ConfigError::TooManyRooms {
                requested: self.peripheral_rooms,
                available: ROOM_OFFSETS.len(),
            });
        }
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.min_entities_per_room == 0 || self.min_entities_per_room > self.max_entities_per_room
        {
            return Err(ConfigError::InvalidSpawnRange {
                min: self.min_entities_per_room,
                max: self.max_entities_per_room,
            });
        }
        if !(self.completion_ratio > 0.0 && self.completion_ratio <= 1.0) {
            return Err(ConfigError::InvalidCompletionRatio(self.completion_ratio));
        }
        check_positive("max_frame_dt", self.max_frame_dt)?;
        check_positive("player_move_speed", self.player_move_speed as f64)?;
        check_positive("look_sensitivity", self.look_sensitivity as f64)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
