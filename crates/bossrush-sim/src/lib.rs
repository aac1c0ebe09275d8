//! Simulation engine for BOSSRUSH.
//!
//! Owns the hecs ECS world, runs systems each tick, and produces
//! GameStateSnapshots for the presentation layer.

pub mod effects;
pub mod engine;
pub mod player;
pub mod systems;
pub mod wave;
pub mod weapon;
pub mod world_setup;

pub use bossrush_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
