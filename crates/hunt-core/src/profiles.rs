//! Per-kind entity profiles.
//!
//! Profiles are immutable and shared by every instance of a kind.

use crate::enums::{Behavior, EntityKind};

/// Static description of an entity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityProfile {
    pub name: &'static str,
    /// Base movement speed (units per second).
    pub speed: f32,
    pub hit_points: u32,
    /// Score awarded when an instance is killed.
    pub points: u32,
    pub behavior: Behavior,
    pub flavor: &'static str,
    /// Visual scale handed to the renderer.
    pub scale: f32,
}

static BACILLUS: EntityProfile = EntityProfile {
    name: "Bacillus",
    speed: 2.0,
    hit_points: 1,
    points: 10,
    behavior: Behavior::Wander,
    flavor: "A lazy rod that drifts wherever the current takes it.",
    scale: 0.5,
};

static STREPTOCOCCUS: EntityProfile = EntityProfile {
    name: "Streptococcus",
    speed: 3.0,
    hit_points: 2,
    points: 25,
    behavior: Behavior::Pursue,
    flavor: "Travels in chains and homes in on anything that moves.",
    scale: 0.6,
};

static SPIROCHETE: EntityProfile = EntityProfile {
    name: "Spirochete",
    speed: 4.0,
    hit_points: 3,
    points: 40,
    behavior: Behavior::Pursue,
    flavor: "Corkscrews through tissue faster than you can aim.",
    scale: 0.8,
};

/// Get the profile for a given kind.
pub fn profile(kind: EntityKind) -> &'static EntityProfile {
    match kind {
        EntityKind::Bacillus => &BACILLUS,
        EntityKind::Streptococcus => &STREPTOCOCCUS,
        EntityKind::Spirochete => &SPIROCHETE,
    }
}

impl EntityKind {
    pub fn profile(self) -> &'static EntityProfile {
        profile(self)
    }
}
