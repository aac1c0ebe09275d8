//! Wave director: boss lifecycle and the countdown between waves.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use bossrush_arena::WorldQuery;
use bossrush_core::enums::WavePhase;
use bossrush_core::events::PresentationEvent;

use crate::wave::WaveState;
use crate::world_setup;

/// Clear the roster and spawn wave `state.wave`.
pub fn start_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    query: &impl WorldQuery,
    state: &mut WaveState,
    events: &mut Vec<PresentationEvent>,
) {
    world_setup::clear_enemies(world, events);
    world_setup::spawn_wave(world, rng, query, state.wave, state.minion_cap, events);
    state.phase = WavePhase::BossActive;
    events.push(PresentationEvent::WaveStarted { wave: state.wave });
    log::info!(
        "wave {} started with {} enemies",
        state.wave,
        world_setup::enemy_count(world)
    );
}

/// Advance the wave state machine by `dt`.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    query: &impl WorldQuery,
    state: &mut WaveState,
    dt: f32,
    events: &mut Vec<PresentationEvent>,
) {
    match state.phase {
        WavePhase::BossActive => {
            if !world_setup::boss_alive(world) {
                state.phase = WavePhase::InterWave {
                    remaining_secs: state.wave_delay_secs,
                };
                events.push(PresentationEvent::BossDefeated { wave: state.wave });
                log::info!(
                    "boss of wave {} defeated, next wave in {:.1}s",
                    state.wave,
                    state.wave_delay_secs
                );
            }
        }
        WavePhase::InterWave { remaining_secs } => {
            let remaining_secs = remaining_secs - dt;
            if remaining_secs > 0.0 {
                state.phase = WavePhase::InterWave { remaining_secs };
            } else {
                state.wave += 1;
                start_wave(world, rng, query, state, events);
            }
        }
    }
}
