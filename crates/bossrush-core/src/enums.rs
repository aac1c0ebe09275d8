//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player weapon identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    /// Automatic rifle (slot 1).
    #[default]
    Ak,
    /// Heavy revolver (slot 2).
    Magnum,
    /// Pump shotgun (slot 3).
    Shotgun,
}

impl WeaponId {
    pub const ALL: [WeaponId; 3] = [WeaponId::Ak, WeaponId::Magnum, WeaponId::Shotgun];

    /// Weapon bound to a number-key slot (1-based). Unknown slots yield `None`.
    pub fn from_slot(slot: u8) -> Option<WeaponId> {
        match slot {
            1 => Some(WeaponId::Ak),
            2 => Some(WeaponId::Magnum),
            3 => Some(WeaponId::Shotgun),
            _ => None,
        }
    }
}

/// Trigger behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Fires repeatedly while the trigger is held.
    Auto,
    /// Fires once per trigger pull.
    Semi,
}

/// Enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Wave leader: tougher, keeps farther back, summons minions.
    Boss,
    /// Pistol grunt.
    Minion,
}

/// Player stance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host to start (assets loading, menu).
    #[default]
    Ready,
    Active,
    /// Input focus lost; the world is frozen.
    Paused,
    /// Player health reached zero. Only cosmetic effects keep decaying.
    GameOver,
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum WavePhase {
    /// The wave's boss is alive.
    #[default]
    BossActive,
    /// The boss is down; the next wave spawns when the countdown ends.
    InterWave { remaining_secs: f32 },
}

/// Who fired a tracer; the renderer picks the color from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TracerColor {
    Player,
    Minion,
    Boss,
}

impl From<EnemyArchetype> for TracerColor {
    fn from(archetype: EnemyArchetype) -> Self {
        match archetype {
            EnemyArchetype::Boss => TracerColor::Boss,
            EnemyArchetype::Minion => TracerColor::Minion,
        }
    }
}

/// Target of a damage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageTarget {
    Player,
    /// Enemy by entity id.
    Enemy(u64),
}
