//! Simulation constants and tuning parameters.
//!
//! Distances are in world units, times in seconds. Defaults that players or
//! tooling may want to change live in [`crate::config::HuntConfig`] instead.

/// Nominal tick rate of the presentation loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest frame delta accepted by a single tick (seconds).
pub const MAX_FRAME_DT: f64 = 0.1;

/// Tolerance applied when comparing accumulated simulation times.
pub const TIME_EPSILON: f64 = 1e-9;

/// Lengths below this are treated as zero when normalizing directions.
pub const DIRECTION_EPSILON: f32 = 1e-6;

// --- Level generation ---

/// Directional offsets of the peripheral rooms from the spawn room.
pub const ROOM_OFFSETS: [[f32; 3]; 4] = [
    [0.0, 0.0, -30.0],
    [30.0, 0.0, 0.0],
    [0.0, 0.0, 30.0],
    [-30.0, 0.0, 0.0],
];

/// Spawn room extents (width, height, depth).
pub const SPAWN_ROOM_EXTENTS: [f32; 3] = [12.0, 6.0, 12.0];

/// Peripheral room width range.
pub const ROOM_WIDTH_MIN: f32 = 10.0;
pub const ROOM_WIDTH_MAX: f32 = 16.0;

/// Peripheral room height range.
pub const ROOM_HEIGHT_MIN: f32 = 5.0;
pub const ROOM_HEIGHT_MAX: f32 = 8.0;

/// Peripheral room depth range.
pub const ROOM_DEPTH_MIN: f32 = 10.0;
pub const ROOM_DEPTH_MAX: f32 = 16.0;

/// Tunnel cross-section width.
pub const TUNNEL_WIDTH: f32 = 4.0;

// --- Entity spawning ---

/// Default range of entities spawned per populated room (inclusive).
pub const ENTITIES_PER_ROOM_MIN: u32 = 3;
pub const ENTITIES_PER_ROOM_MAX: u32 = 5;

/// Distance kept between spawned entities and room walls.
pub const SPAWN_WALL_MARGIN: f32 = 2.0;

/// Spawn height range.
pub const SPAWN_HEIGHT_MIN: f32 = 1.0;
pub const SPAWN_HEIGHT_MAX: f32 = 3.0;

// --- Steering ---

/// Maximum horizontal wander target offset from the current position.
pub const WANDER_OFFSET_HORIZONTAL: f32 = 3.0;

/// Maximum vertical wander target offset from the current position.
pub const WANDER_OFFSET_VERTICAL: f32 = 1.0;

/// Wander retarget countdown range (seconds).
pub const WANDER_RETARGET_MIN_SECS: f32 = 2.0;
pub const WANDER_RETARGET_MAX_SECS: f32 = 4.0;

/// Per-tick velocity smoothing factor while wandering.
pub const WANDER_SMOOTHING: f32 = 0.02;

/// Per-tick velocity smoothing factor while pursuing.
pub const PURSUE_SMOOTHING: f32 = 0.05;

/// Pursuers chase the player inside this range.
pub const PURSUE_TRIGGER_RANGE: f32 = 15.0;

/// Speed multiplier for pursuers that fall back to wandering.
pub const PURSUE_IDLE_SPEED_FACTOR: f32 = 0.5;

/// Navigable vertical band for entities.
pub const ENTITY_MIN_Y: f32 = 0.5;
pub const ENTITY_MAX_Y: f32 = 5.0;

// --- Projectiles ---

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f32 = 25.0;

/// Projectile lifetime measured from creation (seconds).
pub const PROJECTILE_LIFETIME_SECS: f64 = 3.0;

/// Projectile/entity hit radius.
pub const HIT_RADIUS: f32 = 0.6;

/// Damage dealt by a single projectile hit.
pub const PROJECTILE_DAMAGE: u32 = 1;

// --- Scoring ---

/// Fraction of spawned entities that must be killed to complete the hunt.
pub const COMPLETION_RATIO: f64 = 0.8;

/// One-time bonus applied on completion.
pub const COMPLETION_BONUS: u32 = 50;

/// Cap on the externally reported final score.
pub const MAX_REPORTED_SCORE: u32 = 100;

// --- Player ---

/// Eye height of the player above the floor.
pub const PLAYER_EYE_HEIGHT: f32 = 1.6;

/// Default horizontal movement speed (units per second).
pub const PLAYER_MOVE_SPEED: f32 = 5.0;

/// Default radians of rotation per unit of look delta.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch limit (radians, ~85 degrees).
pub const PLAYER_PITCH_LIMIT: f32 = 1.483_53;
