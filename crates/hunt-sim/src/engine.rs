//! The hunt simulation engine.
//!
//! `HuntEngine` owns the hecs ECS world, processes queued commands, runs all
//! systems in a fixed order each tick, and produces `HuntSnapshot`s.
//! Completely headless, single-threaded and deterministic for a fixed seed
//! and input sequence.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hunt_core::commands::{HuntCommand, PlayerInput};
use hunt_core::components::Hostile;
use hunt_core::config::HuntConfig;
use hunt_core::enums::HuntPhase;
use hunt_core::error::ConfigError;
use hunt_core::events::HuntEvent;
use hunt_core::level::LevelGraph;
use hunt_core::state::HuntSnapshot;
use hunt_core::types::SimTime;

use crate::player::{Player, PlayerTuning};
use crate::scoring::{ScoreState, ScoringRules};
use crate::systems;
use crate::world_setup;

type ScoreCallback = Box<dyn FnMut(u32) + Send>;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct HuntEngine {
    world: World,
    time: SimTime,
    phase: HuntPhase,
    config: HuntConfig,
    rules: ScoringRules,
    tuning: PlayerTuning,
    rng: ChaCha8Rng,
    level: LevelGraph,
    player: Player,
    score: ScoreState,
    command_queue: VecDeque<HuntCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<HuntEvent>,
    on_score_update: Option<ScoreCallback>,
    on_complete: Option<ScoreCallback>,
}

impl HuntEngine {
    /// Create a new engine. The config is validated here so a bad config
    /// never reaches the tick loop.
    pub fn new(config: HuntConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: HuntPhase::default(),
            rules: ScoringRules::from(&config),
            tuning: PlayerTuning {
                move_speed: config.player_move_speed,
                look_sensitivity: config.look_sensitivity,
            },
            config,
            rng,
            level: LevelGraph::default(),
            player: Player::default(),
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            on_score_update: None,
            on_complete: None,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HuntCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HuntCommand>) {
        self.command_queue.extend(commands);
    }

    /// Called with the running score on every kill before completion.
    pub fn on_score_update(&mut self, callback: impl FnMut(u32) + Send + 'static) {
        self.on_score_update = Some(Box::new(callback));
    }

    /// Called once with the capped final score when the hunt completes.
    pub fn on_complete(&mut self, callback: impl FnMut(u32) + Send + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `frame_dt` is clamped to `[0, max_frame_dt]`. `input` is the player
    /// input sampled for this frame.
    pub fn tick(&mut self, frame_dt: f64, input: &PlayerInput) -> HuntSnapshot {
        self.process_commands();

        if self.phase.is_running() {
            let dt = self.clamp_frame_dt(frame_dt);
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            &self.player,
            &self.level,
            events,
        )
    }

    /// Re-run the completion check outside a tick. Idempotent once complete.
    pub fn check_completion(&mut self) -> Option<u32> {
        self.finish_if_complete()
    }

    pub fn phase(&self) -> HuntPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    pub fn level(&self) -> &LevelGraph {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replace the generated population with hand-placed hostiles.
    #[cfg(test)]
    pub fn replace_population(
        &mut self,
        hostiles: &[(hunt_core::enums::EntityKind, glam::Vec3)],
    ) {
        let existing: Vec<Entity> = self
            .world
            .query::<&Hostile>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in existing {
            let _ = self.world.despawn(entity);
        }
        for &(kind, position) in hostiles {
            world_setup::spawn_hostile(&mut self.world, kind, position);
        }
        self.score = ScoreState::new(hostiles.len() as u32);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: HuntCommand) {
        match command {
            HuntCommand::Start => {
                if self.phase == HuntPhase::Idle {
                    self.begin_hunt();
                }
            }
            HuntCommand::Restart => self.begin_hunt(),
            HuntCommand::Pause => {
                if self.phase == HuntPhase::Active {
                    self.phase = HuntPhase::Paused;
                }
            }
            HuntCommand::Resume => {
                if self.phase == HuntPhase::Paused {
                    self.phase = HuntPhase::Active;
                }
            }
        }
    }

    /// Generate a fresh level and reset all per-hunt state.
    fn begin_hunt(&mut self) {
        let (level, total_spawned) =
            world_setup::setup_hunt(&mut self.world, &mut self.rng, &self.config);

        self.player = level.spawn_room().map(Player::spawn_in).unwrap_or_default();
        self.level = level;
        self.score = ScoreState::new(total_spawned);
        self.time = SimTime::default();
        self.events.clear();
        self.phase = HuntPhase::Active;

        tracing::info!(
            rooms = self.level.rooms.len(),
            hostiles = total_spawned,
            threshold = self.score.threshold(&self.rules),
            "hunt started"
        );
    }

    fn clamp_frame_dt(&self, frame_dt: f64) -> f64 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0.0;
        }
        if frame_dt > self.config.max_frame_dt {
            tracing::warn!(
                frame_dt,
                max = self.config.max_frame_dt,
                "frame delta clamped"
            );
            return self.config.max_frame_dt;
        }
        frame_dt
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &PlayerInput) {
        let dt_f32 = dt as f32;

        // 1. Player input
        self.player
            .apply_input(input, dt_f32, &self.tuning, self.level.bounds());
        if input.fire_requested {
            let direction = self.player.look_direction();
            systems::projectiles::fire(
                &mut self.world,
                self.player.position,
                direction,
                self.time.elapsed_secs,
            );
            self.events.push(HuntEvent::Fired {
                origin: self.player.position,
                direction,
            });
        }
        // 2. Steering
        systems::steering::run(&mut self.world, &mut self.rng, self.player.position, dt_f32);
        // 3. Projectile advance + expiry
        let now = self.time.elapsed_secs + dt;
        systems::projectiles::run(&mut self.world, dt_f32, now, &mut self.despawn_buffer);
        // 4. Collision
        let outcome = systems::collision::run(&mut self.world);
        // 5. Scoring
        for hit in &outcome.hits {
            if hit.remaining > 0 {
                if let Ok(hostile) = self.world.get::<&Hostile>(hit.target) {
                    self.events.push(HuntEvent::Hit {
                        kind: hostile.kind,
                        remaining: hit.remaining,
                    });
                }
            }
        }
        for &entity in &outcome.killed {
            let Ok(kind) = self.world.get::<&Hostile>(entity).map(|h| h.kind) else {
                continue;
            };
            let points = kind.profile().points;
            self.events.push(HuntEvent::Killed { kind, points });
            tracing::debug!(?kind, points, "hostile killed");

            if let Some(running) = self.score.record_kill(points) {
                self.events.push(HuntEvent::ScoreUpdated { score: running });
                if let Some(callback) = self.on_score_update.as_mut() {
                    callback(running);
                }
            }
        }
        self.finish_if_complete();
        // 6. Cleanup (consumed projectiles, dead hostiles)
        systems::cleanup::run(
            &mut self.world,
            &outcome.hit_projectiles,
            &mut self.despawn_buffer,
        );
    }

    /// Apply the completion transition at most once.
    fn finish_if_complete(&mut self) -> Option<u32> {
        let final_score = self.score.check_completion(&self.rules)?;
        self.phase = HuntPhase::Complete;
        self.events.push(HuntEvent::HuntComplete { final_score });
        if let Some(callback) = self.on_complete.as_mut() {
            callback(final_score);
        }
        tracing::info!(
            final_score,
            kills = self.score.kills,
            total = self.score.total_spawned,
            "hunt complete"
        );
        Some(final_score)
    }
}
