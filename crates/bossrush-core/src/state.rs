//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::PresentationEvent;
use crate::types::SimTime;

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub hud: HudView,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub effects: Vec<EffectView>,
    /// Events raised during this tick, in order.
    pub events: Vec<PresentationEvent>,
}

/// Player camera and body state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Feet position.
    pub position: Vec3,
    /// Camera position (feet + eye height).
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub horizontal_speed: f32,
    pub grounded: bool,
    pub stance: Stance,
    /// Current view-model recoil offset.
    pub recoil: f32,
}

/// Text-level HUD state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: i32,
    pub weapon: WeaponId,
    pub weapon_name: String,
    pub ammo_in_mag: u32,
    pub ammo_reserve: u32,
    pub reloading: bool,
    pub ads: bool,
    pub wave: u32,
    pub enemy_count: u32,
    /// Enemies killed by the player since the game started.
    pub kills: u32,
}

/// Wave director status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave: u32,
    pub phase: WavePhase,
    pub boss_alive: bool,
    pub minion_count: u32,
    pub minion_cap: u32,
}

/// A live enemy for the renderer to place and animate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub archetype: EnemyArchetype,
    pub position: Vec3,
    /// Facing (radians, same convention as the camera yaw).
    pub yaw: f32,
    pub hp: i32,
    /// Model scale.
    pub scale: f32,
    /// Whether the enemy moved this tick (run vs idle animation).
    pub moving: bool,
}

/// A short-lived cosmetic effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EffectView {
    Tracer {
        from: Vec3,
        to: Vec3,
        color: TracerColor,
        remaining_secs: f32,
    },
    MuzzleFlash { position: Vec3, remaining_secs: f32 },
}
