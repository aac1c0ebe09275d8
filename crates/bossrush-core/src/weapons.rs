//! Static weapon catalog.

use serde::Serialize;

use crate::enums::{FireMode, WeaponId};

/// Static definition of a player weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeaponDef {
    pub id: WeaponId,
    pub name: &'static str,
    pub fire_mode: FireMode,
    /// Rounds per minute. Always > 0.
    pub rpm: f32,
    /// Damage per pellet.
    pub damage: i32,
    /// Maximum angular offset per axis (radians, hip fire).
    pub spread: f32,
    pub pellets: u32,
    /// Always >= 1.
    pub mag_size: u32,
    pub reserve_max: u32,
    pub reload_secs: f32,
    /// View-model kick per shot.
    pub recoil: f32,
}

impl WeaponDef {
    /// Seconds between shots.
    pub fn seconds_per_shot(&self) -> f32 {
        60.0 / self.rpm
    }
}

const AK: WeaponDef = WeaponDef {
    id: WeaponId::Ak,
    name: "AK-47",
    fire_mode: FireMode::Auto,
    rpm: 650.0,
    damage: 1,
    spread: 0.011,
    pellets: 1,
    mag_size: 30,
    reserve_max: 120,
    reload_secs: 2.2,
    recoil: 0.012,
};

const MAGNUM: WeaponDef = WeaponDef {
    id: WeaponId::Magnum,
    name: "Magnum",
    fire_mode: FireMode::Semi,
    rpm: 240.0,
    damage: 3,
    spread: 0.006,
    pellets: 1,
    mag_size: 6,
    reserve_max: 48,
    reload_secs: 2.4,
    recoil: 0.05,
};

const SHOTGUN: WeaponDef = WeaponDef {
    id: WeaponId::Shotgun,
    name: "SG Shotgun",
    fire_mode: FireMode::Semi,
    rpm: 95.0,
    damage: 1,
    spread: 0.060,
    pellets: 8,
    mag_size: 8,
    reserve_max: 40,
    reload_secs: 2.8,
    recoil: 0.08,
};

/// Look up the definition for a weapon.
pub fn weapon_def(id: WeaponId) -> &'static WeaponDef {
    match id {
        WeaponId::Ak => &AK,
        WeaponId::Magnum => &MAGNUM,
        WeaponId::Shotgun => &SHOTGUN,
    }
}
