use thiserror::Error;

/// Rejected hunt configuration. Raised before any simulation state exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("level needs at least one populated room")]
    NoRooms,

    #[error("{requested} peripheral rooms requested but only {available} directions exist")]
    TooManyRooms { requested: usize, available: usize },

    #[error("entity roster is empty")]
    EmptyRoster,

    #[error("invalid entities per room: min {min}, max {max}")]
    InvalidSpawnRange { min: u32, max: u32 },

    #[error("completion ratio {0} must be in (0, 1]")]
    InvalidCompletionRatio(f64),

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),
}
