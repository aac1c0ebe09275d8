//! Player state and the held-input snapshot the movement and weapon
//! systems read each tick.

use glam::{Vec2, Vec3};

use bossrush_core::commands::MoveKeys;
use bossrush_core::constants::*;
use bossrush_core::enums::Stance;
use bossrush_core::types::ViewAngles;

/// Everything the simulation tracks about the player body.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Feet position.
    pub position: Vec3,
    /// Horizontal velocity as (x, z).
    pub velocity: Vec2,
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Remaining coyote window (seconds).
    pub coyote: f32,
    /// Remaining jump buffer (seconds).
    pub jump_buffer: f32,
    /// Interpolated eye height above the feet.
    pub eye_height: f32,
    /// Interpolated field of view (degrees).
    pub fov: f32,
    /// Clamped at 0.
    pub health: i32,
    pub view: ViewAngles,
    pub stance: Stance,
}

impl PlayerState {
    pub fn new(health: i32) -> Self {
        Self {
            position: Vec3::from(PLAYER_SPAWN),
            velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            grounded: true,
            coyote: 0.0,
            jump_buffer: 0.0,
            eye_height: EYE_STAND,
            fov: BASE_FOV,
            health,
            view: ViewAngles::default(),
            stance: Stance::Standing,
        }
    }

    /// World-space camera position.
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * self.eye_height
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Apply damage, clamping health at zero. Returns the damage dealt.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount).max(0);
        before - self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PLAYER_MAX_HEALTH)
    }
}

/// Held controls, updated by commands between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub keys: MoveKeys,
    pub sprint: bool,
    pub crouch: bool,
    pub aim: bool,
    pub trigger_held: bool,
    /// Set on a trigger press, consumed by the next weapon tick.
    pub trigger_pulled: bool,
}
