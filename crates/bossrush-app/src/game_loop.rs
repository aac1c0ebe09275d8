//! Game loop thread: runs the simulation engine in real time and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Each iteration measures
//! the real elapsed time and hands it to the engine, which clamps it.
//! Snapshots go to a `SnapshotPublisher` and are stored in shared state for
//! synchronous polling.

use std::io::Write;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use bossrush_core::state::GameStateSnapshot;
use bossrush_sim::engine::SimulationEngine;

use crate::config::AppConfig;
use crate::state::GameLoopCommand;

/// Where finished snapshots go.
pub trait SnapshotPublisher: Send {
    fn publish(&mut self, snapshot: &GameStateSnapshot) -> Result<(), String>;
}

/// Writes one JSON document per line.
pub struct JsonLinesPublisher<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonLinesPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> SnapshotPublisher for JsonLinesPublisher<W> {
    fn publish(&mut self, snapshot: &GameStateSnapshot) -> Result<(), String> {
        serde_json::to_writer(&mut self.out, snapshot)
            .map_err(|e| format!("Failed to write snapshot: {e}"))?;
        self.out
            .write_all(b"\n")
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to write snapshot: {e}"))
    }
}

/// Nominal duration of one tick at the given rate.
pub fn tick_duration(tick_rate_hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate_hz.max(1) as u64)
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the IPC layer and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    publisher: Box<dyn SnapshotPublisher>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bossrush-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, publisher);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command, channel disconnect, or a
/// publish failure.
fn run_game_loop(
    config: AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut publisher: Box<dyn SnapshotPublisher>,
) {
    let period = tick_duration(config.tick_rate_hz);
    let mut engine = SimulationEngine::new(config.sim);
    let mut last_tick = Instant::now().checked_sub(period).unwrap_or_else(Instant::now);
    let mut next_tick_time = Instant::now();
    log::info!("game loop running at {} Hz", config.tick_rate_hz);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the real elapsed time
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;
        let snapshot = engine.tick(dt);

        // 3. Publish
        if let Err(e) = publisher.publish(&snapshot) {
            log::error!("{e}");
            return;
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
