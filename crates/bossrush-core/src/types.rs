//! Fundamental geometric and simulation types.
//!
//! World axes follow the renderer: +Y is up, the ground is the XZ plane,
//! and a camera with zero yaw looks down -Z.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Camera orientation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    /// Rotation about +Y. Positive turns left.
    pub yaw: f32,
    /// Rotation above the horizon. Positive looks up.
    pub pitch: f32,
}

impl ViewAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Full look direction (unit length).
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Look direction projected onto the ground plane and normalized.
    pub fn flat_forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(-sy, 0.0, -cy)
    }

    /// Horizontal right vector (forward x up).
    pub fn right(&self) -> Vec3 {
        self.flat_forward().cross(Vec3::Y).normalize_or_zero()
    }

    /// Camera up vector, perpendicular to forward and right.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or_zero()
    }
}

/// Project a 3D vector onto the ground plane as (x, z).
pub fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Frame-rate independent smoothing factor: `1 - decay^dt`.
pub fn smoothing_factor(decay: f32, dt: f32) -> f32 {
    1.0 - decay.powf(dt)
}

/// Yaw that makes an object at `from` face `to` (same convention as
/// [`ViewAngles::yaw`]).
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    let d = to - from;
    (-d.x).atan2(-d.z)
}
