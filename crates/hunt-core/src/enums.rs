//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hostile entity type. The roster is closed; every variant has a profile in
/// [`crate::profiles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Slow rod-shaped drifter.
    Bacillus,
    /// Chain-forming hunter, tougher and faster.
    Streptococcus,
    /// Corkscrew swimmer, the fastest and toughest.
    Spirochete,
}

impl EntityKind {
    /// Every kind, in roster order.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Bacillus,
        EntityKind::Streptococcus,
        EntityKind::Spirochete,
    ];
}

/// Steering behavior tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Drift toward periodically re-chosen nearby points.
    Wander,
    /// Chase the player when inside the trigger range, wander otherwise.
    Pursue,
}

/// Top-level hunt phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HuntPhase {
    /// No level loaded yet.
    #[default]
    Idle,
    Active,
    Paused,
    /// Completion threshold reached. Terminal for scoring.
    Complete,
}

impl HuntPhase {
    /// Whether systems run during this phase.
    pub fn is_running(self) -> bool {
        matches!(self, HuntPhase::Active | HuntPhase::Complete)
    }
}
