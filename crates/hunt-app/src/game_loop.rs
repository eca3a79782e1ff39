//! Game loop thread: runs the hunt engine at 60Hz and publishes snapshots.
//!
//! The engine is moved into the thread and owned there. Commands arrive via
//! `mpsc` channel, input comes from an `InputSource` fed with the previous
//! snapshot, and every snapshot is stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use hunt_core::constants::{DT, TICK_RATE};
use hunt_core::enums::HuntPhase;
use hunt_core::state::{HuntSnapshot, ScoreView};
use hunt_sim::HuntEngine;

use crate::autopilot::InputSource;
use crate::state::LoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop paces itself and when it gives up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopSettings {
    /// Sleep to hold 60Hz and feed wall-clock frame deltas. Otherwise run
    /// flat out with a fixed delta.
    pub realtime: bool,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Complete { final_score: u32 },
    TimedOut,
    /// Shutdown command or every sender dropped.
    Shutdown,
}

/// Summary returned when the loop thread exits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopReport {
    pub outcome: LoopOutcome,
    pub ticks: u64,
    pub score: ScoreView,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the final report.
pub fn spawn_game_loop<I>(
    engine: HuntEngine,
    input: I,
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<HuntSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<LoopReport>)>
where
    I: InputSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("hunt-game-loop".into())
        .spawn(move || run_game_loop(engine, input, settings, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until completion, timeout, Shutdown or disconnect.
fn run_game_loop(
    mut engine: HuntEngine,
    mut input: impl InputSource,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<HuntSnapshot>>,
) -> LoopReport {
    let mut last: Option<HuntSnapshot> = None;
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();
    let mut last_frame = Instant::now();

    let report = |outcome, ticks, last: &Option<HuntSnapshot>| LoopReport {
        outcome,
        ticks,
        score: last.as_ref().map(|s| s.score).unwrap_or_default(),
    };

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Hunt(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!(ticks, "game loop shutting down");
                    return report(LoopOutcome::Shutdown, ticks, &last);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Sample input and advance one frame
        let frame_dt = if settings.realtime {
            let now = Instant::now();
            let elapsed = now - last_frame;
            last_frame = now;
            elapsed.as_secs_f64()
        } else {
            DT
        };
        let player_input = input.sample(last.as_ref());
        let snapshot = engine.tick(frame_dt, &player_input);
        ticks += 1;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        let phase = snapshot.phase;
        let final_score = snapshot.score.final_score;
        last = Some(snapshot);

        if let (HuntPhase::Complete, Some(final_score)) = (phase, final_score) {
            return report(LoopOutcome::Complete { final_score }, ticks, &last);
        }
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            return report(LoopOutcome::TimedOut, ticks, &last);
        }

        // 4. Sleep until next tick
        if settings.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
