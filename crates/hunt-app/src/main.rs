//! Headless hunt runner.
//!
//! Generates a level, lets the autopilot play it on the game loop thread and
//! logs a summary when the hunt completes or the time limit runs out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use hunt_app::autopilot::Autopilot;
use hunt_app::game_loop::{spawn_game_loop, LoopOutcome, LoopSettings};
use hunt_app::state::{LoopCommand, RunnerState};
use hunt_core::commands::HuntCommand;
use hunt_core::config::HuntConfig;
use hunt_core::constants::TICK_RATE;
use hunt_core::error::ConfigError;
use hunt_sim::HuntEngine;

#[derive(Parser, Debug)]
#[command(name = "hunt")]
#[command(about = "Run a headless hunt driven by the autopilot")]
struct Args {
    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible level (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds before giving up
    #[arg(long, default_value_t = 300.0)]
    max_secs: f64,

    /// Pace the loop at 60Hz against the wall clock
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "hunt failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = match &args.config {
        Some(path) => HuntConfig::from_json_file(path)?,
        None => HuntConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let sensitivity = config.look_sensitivity;
    let mut engine = HuntEngine::new(config)?;
    engine.on_score_update(|score| tracing::info!(score, "score"));
    engine.on_complete(|final_score| tracing::info!(final_score, "hunt complete"));

    let settings = LoopSettings {
        realtime: args.realtime,
        max_ticks: Some((args.max_secs.max(0.0) * TICK_RATE as f64).ceil() as u64),
    };

    let state = RunnerState::new();
    let (tx, handle) = spawn_game_loop(
        engine,
        Autopilot::new(sensitivity),
        settings,
        state.latest_snapshot.clone(),
    )?;
    if let Ok(mut lock) = state.command_tx.lock() {
        *lock = Some(tx);
    }
    state.send(LoopCommand::Hunt(HuntCommand::Start));

    let report = handle.join().map_err(|_| AppError::LoopPanicked)?;

    match report.outcome {
        LoopOutcome::Complete { final_score } => tracing::info!(
            final_score,
            killed = report.score.killed,
            total = report.score.total,
            ticks = report.ticks,
            "hunt finished"
        ),
        LoopOutcome::TimedOut => tracing::warn!(
            score = report.score.score,
            killed = report.score.killed,
            total = report.score.total,
            ticks = report.ticks,
            "time limit reached before completion"
        ),
        LoopOutcome::Shutdown => tracing::info!(ticks = report.ticks, "game loop stopped"),
    }

    if args.json {
        if let Some(snapshot) = state.latest() {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
