//! Score bookkeeping and the `Active -> Complete` state machine.
//!
//! Stored in `HuntEngine`, NOT as ECS entities.

use hunt_core::config::HuntConfig;
use hunt_core::state::ScoreView;

/// Absorbs float error in `ratio * total` before rounding up.
const THRESHOLD_EPSILON: f64 = 1e-9;

/// Completion tuning taken from the hunt config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    pub completion_ratio: f64,
    pub completion_bonus: u32,
    pub max_reported_score: u32,
}

impl From<&HuntConfig> for ScoringRules {
    fn from(config: &HuntConfig) -> Self {
        Self {
            completion_ratio: config.completion_ratio,
            completion_bonus: config.completion_bonus,
            max_reported_score: config.max_reported_score,
        }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    /// Internal running score. Never decreases and is not capped.
    pub score: u32,
    pub kills: u32,
    /// Fixed once the level is populated.
    pub total_spawned: u32,
    pub complete: bool,
    /// Capped score reported when the hunt completed.
    pub final_score: Option<u32>,
}

impl ScoreState {
    pub fn new(total_spawned: u32) -> Self {
        Self {
            total_spawned,
            ..Self::default()
        }
    }

    /// Kills needed to complete: `ceil(ratio * total)`, at least one when
    /// anything was spawned.
    pub fn threshold(&self, rules: &ScoringRules) -> u32 {
        if self.total_spawned == 0 {
            return 0;
        }
        let exact = rules.completion_ratio * self.total_spawned as f64;
        ((exact - THRESHOLD_EPSILON).ceil().max(1.0) as u32).min(self.total_spawned)
    }

    /// Count one kill worth `points`.
    ///
    /// Returns the running score while the hunt is still active, `None` once
    /// it has completed (score and kills still accumulate).
    pub fn record_kill(&mut self, points: u32) -> Option<u32> {
        self.score = self.score.saturating_add(points);
        self.kills = self.kills.saturating_add(1);
        (!self.complete).then_some(self.score)
    }

    /// Fire the completion transition if the threshold has been reached.
    ///
    /// Returns the capped final score exactly once; later calls return `None`
    /// and change nothing.
    pub fn check_completion(&mut self, rules: &ScoringRules) -> Option<u32> {
        if self.complete || self.total_spawned == 0 || self.kills < self.threshold(rules) {
            return None;
        }

        self.complete = true;
        self.score = self.score.saturating_add(rules.completion_bonus);
        let final_score = self.score.min(rules.max_reported_score);
        self.final_score = Some(final_score);
        Some(final_score)
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            killed: self.kills,
            total: self.total_spawned,
            complete: self.complete,
            final_score: self.final_score,
        }
    }
}
