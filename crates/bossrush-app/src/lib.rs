//! BOSSRUSH headless host.
//!
//! Wires the simulation to a real-time loop thread. Commands arrive as JSON
//! lines on stdin; snapshots leave as JSON lines on stdout. Logs go to
//! stderr.

pub mod config;
pub mod game_loop;
pub mod ipc;
pub mod logging;
pub mod state;

pub use bossrush_core as core;
