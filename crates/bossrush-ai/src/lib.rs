//! Enemy AI for BOSSRUSH.
//!
//! Archetype profiles with wave scaling, and the per-tick standoff,
//! aiming and summon decisions.

pub mod fsm;
pub mod profiles;

pub use bossrush_core as core;
