//! Magazine, reserve, reload and fire-rate gating for the equipped gun.

use bossrush_core::enums::{FireMode, WeaponId};
use bossrush_core::weapons::{weapon_def, WeaponDef};

/// Result of pulling the trigger once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A round left the barrel.
    Fired,
    /// The magazine was empty and a reload began.
    ReloadStarted,
    /// Reloading, cooling down, or dry with no reserve.
    Blocked,
}

/// Runtime state of the equipped weapon.
#[derive(Debug, Clone)]
pub struct WeaponState {
    pub id: WeaponId,
    pub ammo_in_mag: u32,
    pub reserve: u32,
    /// Seconds until the next shot. May dip slightly below zero while an
    /// automatic trigger is held so the fire interval stays exact.
    pub cooldown: f32,
    pub reloading: bool,
    /// Seconds left on the current reload.
    pub reload_remaining: f32,
}

impl WeaponState {
    /// Fully loaded weapon.
    pub fn new(id: WeaponId) -> Self {
        let def = weapon_def(id);
        Self {
            id,
            ammo_in_mag: def.mag_size,
            reserve: def.reserve_max,
            cooldown: 0.0,
            reloading: false,
            reload_remaining: 0.0,
        }
    }

    pub fn def(&self) -> &'static WeaponDef {
        weapon_def(self.id)
    }

    /// Equip `id` with a full magazine and reserve. Any reload is cancelled.
    pub fn switch_weapon(&mut self, id: WeaponId) {
        *self = Self::new(id);
    }

    /// Begin a reload. Ignored while already reloading, with a full
    /// magazine, or with nothing in reserve.
    pub fn request_reload(&mut self) -> bool {
        let def = self.def();
        if self.reloading || self.ammo_in_mag >= def.mag_size || self.reserve == 0 {
            return false;
        }
        self.reloading = true;
        self.reload_remaining = def.reload_secs;
        true
    }

    /// Advance timers. `trigger_held` is true while an automatic trigger
    /// is down. Returns true when a reload completed this tick.
    pub fn tick(&mut self, dt: f32, trigger_held: bool) -> bool {
        let mut finished = false;
        if self.reloading {
            self.reload_remaining -= dt;
            if self.reload_remaining <= 0.0 {
                let deficit = self.def().mag_size - self.ammo_in_mag;
                let moved = deficit.min(self.reserve);
                self.ammo_in_mag += moved;
                self.reserve -= moved;
                self.reloading = false;
                self.reload_remaining = 0.0;
                finished = true;
            }
        }

        let floor = if trigger_held && !self.reloading { -dt } else { 0.0 };
        self.cooldown = (self.cooldown - dt).max(floor);
        finished
    }

    /// Attempt one shot.
    pub fn try_fire(&mut self) -> FireOutcome {
        if self.reloading || self.cooldown > 0.0 {
            return FireOutcome::Blocked;
        }
        if self.ammo_in_mag == 0 {
            return if self.request_reload() {
                FireOutcome::ReloadStarted
            } else {
                FireOutcome::Blocked
            };
        }
        self.ammo_in_mag -= 1;
        self.cooldown += self.def().seconds_per_shot();
        FireOutcome::Fired
    }

    pub fn is_automatic(&self) -> bool {
        self.def().fire_mode == FireMode::Auto
    }
}

impl Default for WeaponState {
    fn default() -> Self {
        Self::new(WeaponId::default())
    }
}
