//! Events emitted by the simulation for rendering, audio and HUD feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot presentation events produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// Player weapon discharged (once per shot, not per pellet).
    Fired {
        weapon: WeaponId,
        origin: Vec3,
        direction: Vec3,
    },
    /// Muzzle flash at a world position.
    MuzzleFlash { position: Vec3 },
    /// View-model kick for the shot just fired.
    Recoil { kick: f32 },
    /// Bullet trace line.
    Tracer {
        from: Vec3,
        to: Vec3,
        color: TracerColor,
    },
    /// Health removed from the player or an enemy.
    Damage { target: DamageTarget, amount: i32 },
    /// A new enemy joined the roster.
    EnemySpawned {
        id: u64,
        archetype: EnemyArchetype,
        position: Vec3,
    },
    /// An enemy left the roster (killed or cleared by a new wave).
    EnemyDespawned { id: u64 },
    WeaponSwitched { weapon: WeaponId },
    ReloadStarted { weapon: WeaponId },
    ReloadFinished { weapon: WeaponId },
    WaveStarted { wave: u32 },
    BossDefeated { wave: u32 },
    PlayerDied,
}

/// Consumer of presentation events (renderer, audio, HUD).
pub trait PresentationSink {
    fn present(&mut self, event: &PresentationEvent);

    /// Forward a batch of events in order.
    fn present_all(&mut self, events: &[PresentationEvent]) {
        for event in events {
            self.present(event);
        }
    }
}

impl PresentationSink for Vec<PresentationEvent> {
    fn present(&mut self, event: &PresentationEvent) {
        self.push(event.clone());
    }
}
