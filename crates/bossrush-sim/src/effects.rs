//! Short-lived cosmetic effects mirrored from presentation events.
//!
//! Nothing here feeds back into gameplay. Effects keep decaying while the
//! simulation is paused or over.

use std::collections::VecDeque;

use glam::Vec3;

use bossrush_core::constants::*;
use bossrush_core::enums::TracerColor;
use bossrush_core::events::{PresentationEvent, PresentationSink};
use bossrush_core::state::EffectView;

#[derive(Debug, Clone)]
struct Tracer {
    from: Vec3,
    to: Vec3,
    color: TracerColor,
    remaining: f32,
}

#[derive(Debug, Clone)]
struct Flash {
    position: Vec3,
    remaining: f32,
}

/// Live tracers, muzzle flashes and view recoil.
#[derive(Debug, Clone, Default)]
pub struct EffectState {
    tracers: VecDeque<Tracer>,
    flashes: Vec<Flash>,
    recoil: f32,
}

impl EffectState {
    /// Age every effect by `dt` and drop the expired ones.
    pub fn decay(&mut self, dt: f32) {
        for t in &mut self.tracers {
            t.remaining -= dt;
        }
        self.tracers.retain(|t| t.remaining > 0.0);
        for f in &mut self.flashes {
            f.remaining -= dt;
        }
        self.flashes.retain(|f| f.remaining > 0.0);
        self.recoil *= RECOIL_RECOVERY_DECAY.powf(dt);
    }

    pub fn recoil(&self) -> f32 {
        self.recoil
    }

    pub fn tracer_count(&self) -> usize {
        self.tracers.len()
    }

    pub fn views(&self) -> Vec<EffectView> {
        let tracers = self.tracers.iter().map(|t| EffectView::Tracer {
            from: t.from,
            to: t.to,
            color: t.color,
            remaining_secs: t.remaining,
        });
        let flashes = self.flashes.iter().map(|f| EffectView::MuzzleFlash {
            position: f.position,
            remaining_secs: f.remaining,
        });
        tracers.chain(flashes).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl PresentationSink for EffectState {
    fn present(&mut self, event: &PresentationEvent) {
        match *event {
            PresentationEvent::Tracer { from, to, color } => {
                if self.tracers.len() >= MAX_TRACERS {
                    self.tracers.pop_front();
                }
                self.tracers.push_back(Tracer {
                    from,
                    to,
                    color,
                    remaining: TRACER_LIFETIME_SECS,
                });
            }
            PresentationEvent::MuzzleFlash { position } => self.flashes.push(Flash {
                position,
                remaining: MUZZLE_FLASH_SECS,
            }),
            PresentationEvent::Recoil { kick } => self.recoil += kick,
            _ => {}
        }
    }
}
