//! Projectile/hostile hit resolution.
//!
//! Brute force: every live projectile is tested against every hostile that
//! was alive when the pass began. A projectile registers at most one hit (the
//! first target in iteration order) and is consumed by it. A target may take
//! several hits in one pass; each removes one hit point, saturating at zero.
//! Targets that reach zero are reported once in `killed`.

use glam::Vec3;

/// A live projectile offered to the resolver.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileProbe<Id> {
    pub id: Id,
    pub position: Vec3,
}

/// A hostile offered to the resolver. `hit_points` is updated in place.
#[derive(Debug, Clone, Copy)]
pub struct TargetProbe<Id> {
    pub id: Id,
    pub position: Vec3,
    pub hit_points: u32,
}

/// One projectile striking one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<Id> {
    pub projectile: Id,
    pub target: Id,
    /// Target hit points left after this hit.
    pub remaining: u32,
}

/// Everything a resolution pass decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionOutcome<Id> {
    pub hits: Vec<Hit<Id>>,
    /// Projectiles consumed this pass, each listed once.
    pub hit_projectiles: Vec<Id>,
    /// Targets that reached zero hit points this pass, each listed once.
    pub killed: Vec<Id>,
}

impl<Id> Default for CollisionOutcome<Id> {
    fn default() -> Self {
        Self {
            hits: Vec::new(),
            hit_projectiles: Vec::new(),
            killed: Vec::new(),
        }
    }
}

/// Resolve one pass. `damage` is removed from a target per hit.
pub fn resolve<Id: Copy>(
    projectiles: &[ProjectileProbe<Id>],
    targets: &mut [TargetProbe<Id>],
    radius: f32,
    damage: u32,
) -> CollisionOutcome<Id> {
    let eligible: Vec<bool> = targets.iter().map(|t| t.hit_points > 0).collect();
    let radius_sq = radius * radius;
    let mut outcome = CollisionOutcome::default();

    for projectile in projectiles {
        let struck = targets
            .iter_mut()
            .zip(&eligible)
            .find(|(target, eligible)| {
                **eligible && target.position.distance_squared(projectile.position) < radius_sq
            });

        if let Some((target, _)) = struck {
            target.hit_points = target.hit_points.saturating_sub(damage);
            outcome.hits.push(Hit {
                projectile: projectile.id,
                target: target.id,
                remaining: target.hit_points,
            });
            outcome.hit_projectiles.push(projectile.id);
        }
    }

    outcome.killed = targets
        .iter()
        .zip(&eligible)
        .filter(|(target, eligible)| **eligible && target.hit_points == 0)
        .map(|(target, _)| target.id)
        .collect();

    outcome
}
