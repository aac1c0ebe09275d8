//! Command intake: parses JSON lines from stdin and bridges them to the
//! game loop thread via channels.

use bossrush_core::commands::PlayerCommand;
use bossrush_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::game_loop::{self, SnapshotPublisher};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: AppConfig,
    publisher: Box<dyn SnapshotPublisher>,
) -> Result<(), String> {
    let mut handle_lock = state.loop_handle.lock().map_err(|e| e.to_string())?;
    if handle_lock.is_some() {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), publisher)?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *handle_lock = Some(handle);

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Ask the loop to stop and wait for it.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state.loop_handle.lock().map_err(|e| e.to_string())?.take();
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string()),
        None => Ok(()),
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command_line(line: &str) -> Result<Option<PlayerCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| format!("Ignoring malformed command '{line}': {e}"))
}
