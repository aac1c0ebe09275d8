//! Static arena geometry for BOSSRUSH.
//!
//! Box obstacles, the default map layout, movement collision,
//! line-of-sight and ray casts against cover and enemy hit-volumes.

pub use bossrush_core as core;

pub mod aabb;
pub mod layout;
pub mod los;
pub mod query;

// Re-export key types for convenience.
pub use aabb::Aabb;
pub use layout::Arena;
pub use los::has_line_of_sight;
pub use query::{ray_capsule, HitCandidate, WorldQuery};
