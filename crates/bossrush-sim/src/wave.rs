//! Wave progression state.

use bossrush_core::constants::{MAX_MINIONS, WAVE_DELAY_SECS};
use bossrush_core::enums::WavePhase;

#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave, starting at 1.
    pub wave: u32,
    pub phase: WavePhase,
    /// Countdown reset value between a boss kill and the next wave.
    pub wave_delay_secs: f32,
    /// Maximum simultaneous minions.
    pub minion_cap: usize,
}

impl WaveState {
    pub fn new(wave_delay_secs: f32, minion_cap: usize) -> Self {
        Self {
            wave: 1,
            phase: WavePhase::BossActive,
            wave_delay_secs,
            minion_cap,
        }
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new(WAVE_DELAY_SECS, MAX_MINIONS)
    }
}
