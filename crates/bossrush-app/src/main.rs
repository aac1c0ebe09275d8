use std::io::BufRead;
use std::path::Path;

use bossrush_app::game_loop::JsonLinesPublisher;
use bossrush_app::state::AppState;
use bossrush_app::{config, ipc, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("bossrush: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let path = std::env::args().nth(1);
    let config = config::load_config(path.as_deref().map(Path::new))?;
    logging::setup_logging(config.level_filter()?)?;
    log::info!("starting with seed {}", config.sim.seed);

    let state = AppState::new();
    ipc::start_simulation(
        &state,
        config,
        Box::new(JsonLinesPublisher::new(std::io::stdout())),
    )?;

    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("Failed to read stdin: {e}"))?;
        match ipc::parse_command_line(&line) {
            Ok(Some(command)) => {
                if let Err(e) = ipc::send_command(&state, command) {
                    log::error!("{e}");
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    ipc::stop_simulation(&state)
}
