//! Runner state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use hunt_core::commands::HuntCommand;
use hunt_core::state::HuntSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A hunt command to forward to the engine.
    Hunt(HuntCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles held by whoever drives the loop.
///
/// - `command_tx` is `None` until the loop has been spawned
/// - `latest_snapshot` is written by the loop after every tick
pub struct RunnerState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<HuntSnapshot>>>,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl RunnerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: LoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<HuntSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
