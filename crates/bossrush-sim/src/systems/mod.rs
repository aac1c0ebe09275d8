//! ECS systems that operate on the simulation each tick.
//!
//! Systems are free functions over the world and explicit engine state.
//! They own nothing; all state lives in components or in the engine.

pub mod enemy_ai;
pub mod hitscan;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
pub mod weapon;
