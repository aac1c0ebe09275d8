//! Host configuration, loaded from an optional JSON file.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use bossrush_core::constants::TICK_RATE;
use bossrush_sim::engine::SimConfig;

/// Everything the host needs to start a session. Missing fields fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Target loop rate (Hz).
    pub tick_rate_hz: u32,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate_hz: TICK_RATE,
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|e| format!("Invalid log level '{}': {e}", self.log_level))
    }
}

/// Parse a JSON config document.
pub fn parse_config(json: &str) -> Result<AppConfig, String> {
    let config: AppConfig =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
    if config.tick_rate_hz == 0 {
        return Err("tick_rate_hz must be at least 1".into());
    }
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&json)
}
