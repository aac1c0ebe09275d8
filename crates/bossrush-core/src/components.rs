//! ECS components for hecs entities.
//!
//! Components are plain data with at most small geometric helpers.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyArchetype;

/// World placement of an enemy. `position` is at the feet (y = 0).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Facing (radians).
    pub yaw: f32,
}

/// Core enemy state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    /// Dies at <= 0.
    pub hp: i32,
    /// Movement speed (m/s).
    pub speed: f32,
    /// Preferred distance to the player (meters).
    pub standoff: f32,
    /// Whether the enemy changed position last tick.
    pub moving: bool,
}

/// Pistol loadout and its cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gunner {
    /// Seconds until the next shot may be taken.
    pub cooldown: f32,
    /// Seconds between shots.
    pub shoot_every: f32,
    /// Horizontal range beyond which the enemy holds fire (meters).
    pub range: f32,
    pub damage: i32,
    /// Maximum aim jitter per axis (radians, cosmetic).
    pub accuracy: f32,
}

/// Ability to call in reinforcements. Only bosses carry this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summoner {
    /// Seconds accumulated since the last summon.
    pub timer: f32,
    pub every: f32,
    /// Minions per summon.
    pub count: u32,
}

/// Vertical capsule used for hitscan tests, relative to the feet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitVolume {
    pub radius: f32,
    /// Half length of the capsule's inner segment.
    pub half_segment: f32,
    /// Height of the capsule centre above the feet.
    pub center_height: f32,
}

impl HitVolume {
    /// Capsule for a model at the given scale.
    pub fn scaled(scale: f32) -> Self {
        use crate::constants::*;
        Self {
            radius: HIT_CAPSULE_RADIUS * scale,
            half_segment: HIT_CAPSULE_HALF_SEGMENT * scale,
            center_height: HIT_CAPSULE_CENTER_HEIGHT * scale,
        }
    }

    /// World-space endpoints of the inner segment for an entity at `feet`.
    pub fn segment(&self, feet: Vec3) -> (Vec3, Vec3) {
        let center = feet + Vec3::Y * self.center_height;
        let half = Vec3::Y * self.half_segment;
        (center - half, center + half)
    }
}

/// Model scale, exported for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelScale(pub f32);
