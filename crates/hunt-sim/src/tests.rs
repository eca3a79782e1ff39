//! Tests for the hunt engine, its systems, collision resolution and scoring.

use std::sync::{Arc, Mutex};

use glam::{Vec2, Vec3};
use hecs::World;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hunt_core::commands::{HuntCommand, PlayerInput};
use hunt_core::components::{Health, Hostile, Projectile};
use hunt_core::config::HuntConfig;
use hunt_core::constants::*;
use hunt_core::enums::{EntityKind, HuntPhase};
use hunt_core::error::ConfigError;
use hunt_core::events::HuntEvent;
use hunt_core::state::HuntSnapshot;
use hunt_core::types::Transform;

use crate::collision::{resolve, ProjectileProbe, TargetProbe};
use crate::engine::HuntEngine;
use crate::player::{Player, PlayerTuning};
use crate::scoring::{ScoreState, ScoringRules};
use crate::systems::{cleanup, collision, projectiles, steering};
use crate::world_setup;

const EYE: Vec3 = Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0);

/// Far from the firing line, one per peripheral room.
const BYSTANDERS: [Vec3; 4] = [
    Vec3::new(30.0, 2.0, 5.0),
    Vec3::new(-30.0, 2.0, 5.0),
    Vec3::new(5.0, 2.0, 30.0),
    Vec3::new(-5.0, 2.0, 30.0),
];

fn started_engine(seed: u64) -> HuntEngine {
    let mut engine = HuntEngine::new(HuntConfig::seeded(seed)).unwrap();
    engine.queue_command(HuntCommand::Start);
    engine.tick(DT, &PlayerInput::default());
    engine
}

/// Engine with one hand-placed target in front of the player plus
/// bystander bacilli elsewhere.
fn engine_with_target(kind: EntityKind) -> HuntEngine {
    let mut engine = started_engine(42);
    let mut population = vec![(kind, Vec3::new(0.0, PLAYER_EYE_HEIGHT, -2.0))];
    population.extend(BYSTANDERS.iter().map(|&p| (EntityKind::Bacillus, p)));
    engine.replace_population(&population);
    engine
}

fn idle() -> PlayerInput {
    PlayerInput::default()
}

/// Tick with no input, collecting events, until `done` or `max` ticks.
fn tick_until(
    engine: &mut HuntEngine,
    max: usize,
    events: &mut Vec<HuntEvent>,
    done: impl Fn(&HuntSnapshot) -> bool,
) -> HuntSnapshot {
    let mut snap = engine.tick(DT, &idle());
    events.extend(snap.events.iter().cloned());
    for _ in 1..max {
        if done(&snap) {
            break;
        }
        snap = engine.tick(DT, &idle());
        events.extend(snap.events.iter().cloned());
    }
    snap
}

fn rules() -> ScoringRules {
    ScoringRules::from(&HuntConfig::default())
}

// ---- Construction ----

#[test]
fn test_invalid_config_fails_fast() {
    let config = HuntConfig {
        peripheral_rooms: 0,
        ..Default::default()
    };
    assert!(matches!(HuntEngine::new(config), Err(ConfigError::NoRooms)));

    let config = HuntConfig {
        roster: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(
        HuntEngine::new(config),
        Err(ConfigError::EmptyRoster)
    ));
}

#[test]
fn test_idle_until_started() {
    let mut engine = HuntEngine::new(HuntConfig::seeded(1)).unwrap();
    let snap = engine.tick(DT, &idle());
    assert_eq!(snap.phase, HuntPhase::Idle);
    assert_eq!(snap.time.tick, 0);
    assert!(snap.rooms.is_empty());
}

// ---- Level and population ----

#[test]
fn test_start_generates_level_and_population() {
    let mut engine = HuntEngine::new(HuntConfig::seeded(3)).unwrap();
    engine.queue_command(HuntCommand::Start);
    let snap = engine.tick(DT, &idle());

    assert_eq!(snap.phase, HuntPhase::Active);
    assert_eq!(snap.rooms.len(), 5);
    assert!(!snap.rooms[0].has_entities);
    assert!((12..=20).contains(&snap.score.total));
    assert_eq!(snap.hostiles.len() as u32, snap.score.total);
    assert_eq!(snap.player.position, EYE);
}

#[test]
fn test_population_spread_over_rooms() {
    let engine = started_engine(11);
    for index in 1..engine.level().rooms.len() {
        let count = engine
            .world()
            .query::<&Hostile>()
            .iter()
            .filter(|(_, h)| h.room == index)
            .count();
        assert!((3..=5).contains(&count), "room {index} has {count}");
    }
}

#[test]
fn test_second_start_is_ignored() {
    let mut engine = started_engine(5);
    let rooms = engine.level().rooms.clone();
    engine.queue_command(HuntCommand::Start);
    engine.tick(DT, &idle());
    assert_eq!(engine.level().rooms, rooms);
}

#[test]
fn test_restart_resets_hunt() {
    let mut engine = engine_with_target(EntityKind::Bacillus);
    engine.tick(DT, &PlayerInput::fire());
    let mut events = Vec::new();
    tick_until(&mut engine, 20, &mut events, |s| s.score.killed == 1);
    assert_eq!(engine.score().score, 10);

    engine.queue_command(HuntCommand::Restart);
    let snap = engine.tick(DT, &idle());
    assert_eq!(snap.phase, HuntPhase::Active);
    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.score.killed, 0);
    assert_eq!(snap.time.tick, 1);
    assert_eq!(snap.hostiles.len() as u32, snap.score.total);
}

// ---- Determinism ----

fn scripted_input(tick: usize) -> PlayerInput {
    PlayerInput {
        move_vector: Vec2::new(0.0, if tick % 120 < 60 { 1.0 } else { -1.0 }),
        look_delta: Vec2::new(7.0, 0.0),
        fire_requested: tick % 7 == 0,
    }
}

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(12345);
    let mut engine_b = started_engine(12345);

    for i in 0..300 {
        let snap_a = engine_a.tick(DT, &scripted_input(i));
        let snap_b = engine_b.tick(DT, &scripted_input(i));

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let engine_a = started_engine(111);
    let engine_b = started_engine(222);
    assert_ne!(engine_a.level().rooms, engine_b.level().rooms);
}

// ---- Timing ----

#[test]
fn test_frame_dt_clamped() {
    let mut engine = started_engine(9);
    let before = engine.time().elapsed_secs;
    engine.tick(5.0, &idle());
    let advanced = engine.time().elapsed_secs - before;
    assert!((advanced - MAX_FRAME_DT).abs() < 1e-12, "advanced {advanced}");
}

#[test]
fn test_bad_frame_dt_treated_as_zero() {
    let mut engine = started_engine(9);
    let before = engine.time().elapsed_secs;
    engine.tick(f64::NAN, &idle());
    engine.tick(-1.0, &idle());
    assert_eq!(engine.time().elapsed_secs, before);
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started_engine(2);
    for _ in 0..9 {
        engine.tick(DT, &idle());
    }
    assert_eq!(engine.time().tick, 10);

    engine.queue_command(HuntCommand::Pause);
    let positions = engine.tick(DT, &idle()).hostiles;
    for _ in 0..10 {
        engine.tick(DT, &PlayerInput::fire());
    }
    assert_eq!(engine.time().tick, 10, "Time should not advance while paused");
    assert_eq!(engine.phase(), HuntPhase::Paused);
    let snap = engine.tick(DT, &idle());
    assert_eq!(snap.hostiles, positions, "nothing moves while paused");
    assert!(snap.projectiles.is_empty(), "no firing while paused");

    engine.queue_command(HuntCommand::Resume);
    for _ in 0..10 {
        engine.tick(DT, &idle());
    }
    assert_eq!(engine.time().tick, 20);
    assert_eq!(engine.phase(), HuntPhase::Active);
}

// ---- Player ----

#[test]
fn test_player_turns_and_walks() {
    let tuning = PlayerTuning {
        move_speed: 5.0,
        look_sensitivity: 0.01,
    };
    let mut player = Player {
        position: EYE,
        yaw: 0.0,
        pitch: 0.0,
    };

    let input = PlayerInput {
        move_vector: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    player.apply_input(&input, 1.0, &tuning, None);
    assert!((player.position - Vec3::new(0.0, PLAYER_EYE_HEIGHT, -5.0)).length() < 1e-5);

    let turn = PlayerInput {
        look_delta: Vec2::new(std::f32::consts::FRAC_PI_2 / 0.01, 0.0),
        ..Default::default()
    };
    player.apply_input(&turn, 1.0, &tuning, None);
    assert!((player.look_direction() - Vec3::X).length() < 1e-4);
}

#[test]
fn test_player_pitch_clamped_and_bounded() {
    let tuning = PlayerTuning {
        move_speed: 100.0,
        look_sensitivity: 1.0,
    };
    let mut player = Player {
        position: EYE,
        ..Default::default()
    };
    let input = PlayerInput {
        move_vector: Vec2::new(3.0, 0.0),
        look_delta: Vec2::new(0.0, 10.0),
        fire_requested: false,
    };
    let bounds = (Vec3::new(-6.0, 0.0, -6.0), Vec3::new(6.0, 6.0, 6.0));
    player.apply_input(&input, 1.0, &tuning, Some(bounds));

    assert_eq!(player.pitch, PLAYER_PITCH_LIMIT);
    assert_eq!(player.position.x, 6.0);
    assert_eq!(player.position.y, PLAYER_EYE_HEIGHT);
}

#[test]
fn test_player_ignores_non_finite_input() {
    let tuning = PlayerTuning {
        move_speed: 5.0,
        look_sensitivity: 0.01,
    };
    let mut player = Player {
        position: EYE,
        ..Default::default()
    };
    let input = PlayerInput {
        move_vector: Vec2::new(f32::NAN, 0.0),
        look_delta: Vec2::new(f32::INFINITY, 0.0),
        fire_requested: false,
    };
    player.apply_input(&input, 1.0, &tuning, None);
    assert_eq!(player.position, EYE);
    assert_eq!(player.yaw, 0.0);
}

// ---- Scenario A: one-hit kill ----

#[test]
fn test_single_hit_kills_bacillus() {
    let mut engine = engine_with_target(EntityKind::Bacillus);
    let scores = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&scores);
    engine.on_score_update(move |score| sink.lock().unwrap().push(score));

    let mut events = engine.tick(DT, &PlayerInput::fire()).events;
    let snap = tick_until(&mut engine, 20, &mut events, |s| s.score.killed == 1);

    assert_eq!(snap.score.score, 10);
    assert_eq!(snap.score.killed, 1);
    assert!(!snap.score.complete);
    assert_eq!(snap.hostiles.len(), 4, "killed hostile removed immediately");
    assert!(snap.projectiles.is_empty(), "projectile consumed by the hit");
    assert!(events.contains(&HuntEvent::Killed {
        kind: EntityKind::Bacillus,
        points: 10
    }));
    assert_eq!(*scores.lock().unwrap(), vec![10]);
}

// ---- Scenario B: two-hit kill ----

#[test]
fn test_streptococcus_survives_first_hit() {
    let mut engine = engine_with_target(EntityKind::Streptococcus);
    let target_id = engine
        .tick(DT, &PlayerInput::fire())
        .hostiles
        .iter()
        .find(|h| h.kind == EntityKind::Streptococcus)
        .map(|h| h.id)
        .unwrap();

    let mut events = Vec::new();
    let snap = tick_until(&mut engine, 20, &mut events, |s| {
        s.hostiles.iter().any(|h| h.id == target_id && h.hit_points == 1)
    });
    let wounded = *snap.hostiles.iter().find(|h| h.id == target_id).unwrap();
    assert_eq!(wounded.hit_points, 1);
    assert_eq!(snap.score.score, 0);
    assert!(events.contains(&HuntEvent::Hit {
        kind: EntityKind::Streptococcus,
        remaining: 1
    }));

    // Still steered.
    let next = engine.tick(DT, &PlayerInput::fire());
    let moved = next.hostiles.iter().find(|h| h.id == target_id).unwrap();
    assert_ne!(moved.position, wounded.position);

    let snap = tick_until(&mut engine, 20, &mut events, |s| s.score.killed == 1);
    assert!(snap.hostiles.iter().all(|h| h.id != target_id));
    assert_eq!(snap.score.score, 25);
}

// ---- Completion ----

#[test]
fn test_completion_fires_once() {
    let mut engine = started_engine(42);
    let spot = Vec3::new(0.0, PLAYER_EYE_HEIGHT, -2.0);
    engine.replace_population(&[(EntityKind::Bacillus, spot); 5]);

    let completions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&completions);
    engine.on_complete(move |score| sink.lock().unwrap().push(score));
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&updates);
    engine.on_score_update(move |score| sink.lock().unwrap().push(score));

    let mut events = Vec::new();
    for _ in 0..10 {
        events.extend(engine.tick(DT, &PlayerInput::fire()).events);
    }
    let snap = tick_until(&mut engine, 30, &mut events, |s| s.score.killed == 5);

    // 4 of 5 completes; bonus on 40, capped at 100 -> 90.
    assert_eq!(snap.phase, HuntPhase::Complete);
    assert_eq!(snap.score.killed, 5);
    assert_eq!(snap.score.final_score, Some(90));
    assert_eq!(snap.score.score, 100, "kills after completion still count");
    assert_eq!(*completions.lock().unwrap(), vec![90]);
    assert_eq!(*updates.lock().unwrap(), vec![10, 20, 30, 40]);

    let complete_events = events
        .iter()
        .filter(|e| matches!(e, HuntEvent::HuntComplete { .. }))
        .count();
    assert_eq!(complete_events, 1);

    assert_eq!(engine.check_completion(), None);
    assert_eq!(engine.score().score, 100);
    assert_eq!(completions.lock().unwrap().len(), 1);
}

// ---- Scenario D: projectile lifetime ----

#[test]
fn test_projectile_lives_just_under_lifetime() {
    let mut engine = engine_with_target(EntityKind::Bacillus);
    engine.replace_population(&[(EntityKind::Bacillus, BYSTANDERS[0])]);

    let step = MAX_FRAME_DT;
    let snap = engine.tick(step, &PlayerInput::fire());
    assert_eq!(snap.projectiles.len(), 1);
    for _ in 0..27 {
        engine.tick(step, &idle());
    }
    // Age 2.9
    let snap = engine.tick(step, &idle());
    assert_eq!(snap.projectiles.len(), 1, "live at T+2.9");
    // Age 3.0
    let snap = engine.tick(step, &idle());
    assert!(snap.projectiles.is_empty(), "removed by T+3.0");
}

#[test]
fn test_projectile_collidable_before_expiry() {
    let mut world = World::new();
    let start = Vec3::new(0.0, 1.5, 0.0);
    projectiles::fire(&mut world, start, Vec3::NEG_Z, 0.0);
    let end = start + Vec3::NEG_Z * PROJECTILE_SPEED * 0.1;
    world_setup::spawn_hostile(&mut world, EntityKind::Bacillus, end);

    let mut buffer = Vec::new();
    projectiles::run(&mut world, 0.1, 2.9, &mut buffer);
    let outcome = collision::run(&mut world);
    assert_eq!(outcome.hits.len(), 1);
    assert_eq!(outcome.killed.len(), 1);
}

#[test]
fn test_expired_projectile_never_collides() {
    let mut world = World::new();
    let start = Vec3::new(0.0, 1.5, 0.0);
    projectiles::fire(&mut world, start, Vec3::NEG_Z, 0.0);
    let end = start + Vec3::NEG_Z * PROJECTILE_SPEED * 0.1;
    world_setup::spawn_hostile(&mut world, EntityKind::Bacillus, end);

    let mut buffer = Vec::new();
    projectiles::run(&mut world, 0.1, 3.0, &mut buffer);
    assert_eq!(world.query::<&Projectile>().iter().count(), 0);
    let outcome = collision::run(&mut world);
    assert!(outcome.hits.is_empty());
}

#[test]
fn test_degenerate_fire_direction() {
    let projectile = projectiles::make_projectile(Vec3::ZERO, 1.0);
    assert_eq!(projectile.direction, Vec3::NEG_Z);
    assert_eq!(projectile.speed, PROJECTILE_SPEED);
    assert_eq!(projectile.spawned_at, 1.0);
}

#[test]
fn test_projectile_advance() {
    let mut world = World::new();
    projectiles::fire(&mut world, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 0.0);
    let mut buffer = Vec::new();
    projectiles::run(&mut world, 0.5, 0.5, &mut buffer);

    let mut query = world.query::<&Transform>();
    let (_, transform) = query.iter().next().unwrap();
    assert!((transform.position - Vec3::new(12.5, 0.0, 0.0)).length() < 1e-5);
}

// ---- Steering system ----

#[test]
fn test_dead_hostiles_not_steered() {
    let mut world = World::new();
    let position = Vec3::new(0.0, 2.0, -3.0);
    let entity = world_setup::spawn_hostile(&mut world, EntityKind::Streptococcus, position);
    world.get::<&mut Health>(entity).unwrap().hit_points = 0;

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..10 {
        steering::run(&mut world, &mut rng, EYE, DT as f32);
    }
    assert_eq!(world.get::<&Transform>(entity).unwrap().position, position);
}

#[test]
fn test_live_hostiles_steered() {
    let mut world = World::new();
    let position = Vec3::new(0.0, 2.0, -3.0);
    let entity = world_setup::spawn_hostile(&mut world, EntityKind::Streptococcus, position);

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..10 {
        steering::run(&mut world, &mut rng, EYE, DT as f32);
    }
    let now = world.get::<&Transform>(entity).unwrap().position;
    assert!(now.z > position.z, "pursuer closes on the player");
}

// ---- Cleanup ----

#[test]
fn test_cleanup_removes_dead_and_consumed_once() {
    let mut world = World::new();
    let dead = world_setup::spawn_hostile(&mut world, EntityKind::Bacillus, Vec3::ZERO);
    let alive = world_setup::spawn_hostile(&mut world, EntityKind::Bacillus, Vec3::ONE);
    world.get::<&mut Health>(dead).unwrap().hit_points = 0;
    let shot = projectiles::fire(&mut world, Vec3::ZERO, Vec3::X, 0.0);

    let mut buffer = Vec::new();
    cleanup::run(&mut world, &[shot, shot], &mut buffer);

    assert!(!world.contains(dead));
    assert!(!world.contains(shot));
    assert!(world.contains(alive));
}

// ---- Collision resolver ----

fn probe(id: u32, x: f32) -> ProjectileProbe<u32> {
    ProjectileProbe {
        id,
        position: Vec3::new(x, 0.0, 0.0),
    }
}

fn target(id: u32, x: f32, hit_points: u32) -> TargetProbe<u32> {
    TargetProbe {
        id,
        position: Vec3::new(x, 0.0, 0.0),
        hit_points,
    }
}

#[test]
fn test_resolve_hit_inside_radius() {
    let mut targets = [target(10, 0.5, 1)];
    let outcome = resolve(&[probe(1, 0.0)], &mut targets, HIT_RADIUS, 1);
    assert_eq!(outcome.hit_projectiles, vec![1]);
    assert_eq!(outcome.killed, vec![10]);
    assert_eq!(targets[0].hit_points, 0);
}

#[test]
fn test_resolve_miss_at_radius() {
    let mut targets = [target(10, HIT_RADIUS, 1)];
    let outcome = resolve(&[probe(1, 0.0)], &mut targets, HIT_RADIUS, 1);
    assert!(outcome.hits.is_empty());
    assert!(outcome.killed.is_empty());
    assert_eq!(targets[0].hit_points, 1);
}

#[test]
fn test_resolve_projectile_hits_only_first_target() {
    let mut targets = [target(10, 0.1, 2), target(11, -0.1, 2)];
    let outcome = resolve(&[probe(1, 0.0)], &mut targets, HIT_RADIUS, 1);
    assert_eq!(outcome.hits.len(), 1);
    assert_eq!(outcome.hits[0].target, 10);
    assert_eq!(targets[0].hit_points, 1);
    assert_eq!(targets[1].hit_points, 2);
}

#[test]
fn test_resolve_target_hit_by_many_killed_once() {
    let mut targets = [target(10, 0.0, 2)];
    let projectiles = [probe(1, 0.1), probe(2, -0.1), probe(3, 0.2)];
    let outcome = resolve(&projectiles, &mut targets, HIT_RADIUS, 1);

    assert_eq!(outcome.hits.len(), 3, "every projectile registers its hit");
    assert_eq!(outcome.hit_projectiles, vec![1, 2, 3]);
    assert_eq!(outcome.killed, vec![10]);
    assert_eq!(targets[0].hit_points, 0, "clamped at zero");
}

#[test]
fn test_resolve_ignores_dead_targets() {
    let mut targets = [target(10, 0.0, 0), target(11, 0.3, 1)];
    let outcome = resolve(&[probe(1, 0.0)], &mut targets, HIT_RADIUS, 1);
    assert_eq!(outcome.hits[0].target, 11);
    assert_eq!(outcome.killed, vec![11]);
}

#[test]
fn test_resolve_empty_inputs() {
    let outcome = resolve::<u32>(&[], &mut [], HIT_RADIUS, 1);
    assert!(outcome.hits.is_empty());
}

// ---- Scoring ----

#[test]
fn test_threshold_is_ceiling() {
    let rules = rules();
    assert_eq!(ScoreState::new(20).threshold(&rules), 16);
    assert_eq!(ScoreState::new(5).threshold(&rules), 4);
    assert_eq!(ScoreState::new(3).threshold(&rules), 3);
    assert_eq!(ScoreState::new(1).threshold(&rules), 1);
    assert_eq!(ScoreState::new(13).threshold(&rules), 11);
}

#[test]
fn test_scenario_twenty_spawned() {
    let rules = rules();
    let mut score = ScoreState::new(20);

    for i in 1..=15 {
        assert_eq!(score.record_kill(3), Some(3 * i));
        assert_eq!(score.check_completion(&rules), None);
    }
    assert_eq!(score.record_kill(3), Some(48));
    assert_eq!(score.check_completion(&rules), Some(98));
    assert!(score.complete);
    assert_eq!(score.final_score, Some(98));
}

#[test]
fn test_final_score_capped() {
    let rules = rules();
    let mut score = ScoreState::new(20);
    for _ in 0..16 {
        score.record_kill(25);
    }
    assert_eq!(score.check_completion(&rules), Some(100));
    assert_eq!(score.score, 450, "internal score is not capped");
}

#[test]
fn test_completion_idempotent() {
    let rules = rules();
    let mut score = ScoreState::new(5);
    for _ in 0..4 {
        score.record_kill(10);
    }
    assert_eq!(score.check_completion(&rules), Some(90));
    let after = score.clone();

    assert_eq!(score.check_completion(&rules), None);
    assert_eq!(score, after, "no second bonus");

    assert_eq!(score.record_kill(10), None, "no updates after completion");
    assert_eq!(score.score, 100);
    assert_eq!(score.check_completion(&rules), None);
    assert_eq!(score.final_score, Some(90));
}

#[test]
fn test_tiny_ratio_still_needs_a_kill() {
    let rules = ScoringRules {
        completion_ratio: 1e-12,
        ..rules()
    };
    let mut score = ScoreState::new(20);
    assert_eq!(score.threshold(&rules), 1);
    assert_eq!(score.check_completion(&rules), None);
    assert_eq!(score.score, 0, "no bonus without kills");

    score.record_kill(10);
    assert_eq!(score.check_completion(&rules), Some(60));
}

#[test]
fn test_empty_population_never_completes() {
    let mut score = ScoreState::new(0);
    assert_eq!(score.check_completion(&rules()), None);
    assert!(!score.complete);
}

proptest! {
    #[test]
    fn prop_score_monotonic_and_completes_once(
        points in proptest::collection::vec(1u32..50, 1..40),
        total in 1u32..30,
    ) {
        let rules = rules();
        let mut score = ScoreState::new(total);
        let mut last = 0;
        let mut completions = 0;

        for p in points {
            score.record_kill(p);
            if score.check_completion(&rules).is_some() {
                completions += 1;
            }
            prop_assert!(score.score >= last);
            last = score.score;
        }

        prop_assert!(completions <= 1);
        prop_assert_eq!(score.complete, score.kills >= score.threshold(&rules));
        if let Some(final_score) = score.final_score {
            prop_assert!(final_score <= rules.max_reported_score);
        }
    }
}

// ---- Whole-run invariants ----

#[test]
fn test_long_run_invariants() {
    let mut engine = started_engine(777);
    let mut last_score = 0;
    let mut last_killed = 0;

    for i in 0..3000 {
        let snap = engine.tick(DT, &scripted_input(i));
        assert!(snap.score.score >= last_score, "score decreased");
        assert!(snap.score.killed >= last_killed, "kills decreased");
        assert!(snap.score.killed <= snap.score.total);
        assert!(snap.hostiles.iter().all(|h| h.hit_points > 0));
        assert!(snap
            .hostiles
            .iter()
            .all(|h| (ENTITY_MIN_Y..=ENTITY_MAX_Y).contains(&h.position.y)));
        assert_eq!(
            snap.hostiles.len() as u32,
            snap.score.total - snap.score.killed
        );
        last_score = snap.score.score;
        last_killed = snap.score.killed;
    }
}
