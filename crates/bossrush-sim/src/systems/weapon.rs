//! Weapon system: reload timer, trigger handling and firing.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use bossrush_arena::WorldQuery;
use bossrush_core::events::PresentationEvent;

use crate::player::{InputState, PlayerState};
use crate::systems::hitscan::{self, muzzle_position, ShotReport};
use crate::weapon::{FireOutcome, WeaponState};

/// Advance the equipped weapon and fire it if the trigger asks for it.
/// Automatic weapons fire while the trigger is held; semi-automatic
/// weapons fire once per pull. Returns the shot report when a round fired.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    query: &impl WorldQuery,
    rng: &mut ChaCha8Rng,
    weapon: &mut WeaponState,
    input: &mut InputState,
    player: &PlayerState,
    dt: f32,
    events: &mut Vec<PresentationEvent>,
) -> Option<ShotReport> {
    let automatic = weapon.is_automatic();
    if weapon.tick(dt, automatic && input.trigger_held) {
        log::debug!(
            "{:?} reloaded: {}/{}",
            weapon.id,
            weapon.ammo_in_mag,
            weapon.reserve
        );
        events.push(PresentationEvent::ReloadFinished { weapon: weapon.id });
    }

    let pulled = std::mem::take(&mut input.trigger_pulled);
    let wants_fire = pulled || (automatic && input.trigger_held);
    if !wants_fire {
        return None;
    }

    match weapon.try_fire() {
        FireOutcome::Fired => {
            let def = weapon.def();
            let eye = player.eye();
            events.push(PresentationEvent::Fired {
                weapon: weapon.id,
                origin: eye,
                direction: player.view.forward(),
            });
            events.push(PresentationEvent::MuzzleFlash {
                position: muzzle_position(eye, &player.view),
            });
            events.push(PresentationEvent::Recoil { kick: def.recoil });
            Some(hitscan::resolve(
                world,
                query,
                rng,
                eye,
                &player.view,
                def,
                input.aim,
                events,
            ))
        }
        FireOutcome::ReloadStarted => {
            log::debug!("{:?} empty, reloading", weapon.id);
            events.push(PresentationEvent::ReloadStarted { weapon: weapon.id });
            None
        }
        FireOutcome::Blocked => None,
    }
}
