//! Enemy AI system: standoff movement, LOS-gated pistol fire and boss
//! summons.
//!
//! Decisions come from `bossrush_ai::fsm`; this system applies them to the
//! roster and resolves shots against the player.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use bossrush_ai::fsm::{aim_direction, evaluate, tick_summon, EnemyContext, Maneuver};
use bossrush_arena::WorldQuery;
use bossrush_core::components::{Enemy, Gunner, Summoner, Transform};
use bossrush_core::constants::ENEMY_MUZZLE_HEIGHT;
use bossrush_core::enums::DamageTarget;
use bossrush_core::events::PresentationEvent;

use crate::player::PlayerState;
use crate::wave::WaveState;
use crate::world_setup;

/// Run every enemy for one tick.
pub fn run(
    world: &mut World,
    query: &impl WorldQuery,
    rng: &mut ChaCha8Rng,
    player: &mut PlayerState,
    wave: &WaveState,
    dt: f32,
    events: &mut Vec<PresentationEvent>,
) {
    // Summons need the world, so they are applied after the query.
    let mut summons: Vec<(Vec3, u32)> = Vec::new();

    for (_entity, (enemy, transform, gunner, summoner)) in world.query_mut::<(
        &mut Enemy,
        &mut Transform,
        &mut Gunner,
        Option<&mut Summoner>,
    )>() {
        let update = evaluate(&EnemyContext {
            position: transform.position,
            player_position: player.position,
            speed: enemy.speed,
            standoff: enemy.standoff,
            shoot_cooldown: gunner.cooldown,
            shoot_range: gunner.range,
            dt,
        });

        let position = query.clamp_to_bounds(update.new_position);
        enemy.moving = update.maneuver != Maneuver::Hold && position != transform.position;
        transform.position = position;
        transform.yaw = update.yaw;
        gunner.cooldown = update.shoot_cooldown;

        if update.wants_to_shoot && !player.is_dead() {
            let muzzle = position + Vec3::Y * ENEMY_MUZZLE_HEIGHT;
            let target = player.eye();
            if query.has_line_of_sight(muzzle, target) {
                let dir = aim_direction(rng, muzzle, target, gunner.accuracy);
                events.push(PresentationEvent::MuzzleFlash { position: muzzle });
                events.push(PresentationEvent::Tracer {
                    from: muzzle,
                    to: muzzle + dir * muzzle.distance(target),
                    color: enemy.archetype.into(),
                });
                let dealt = player.take_damage(gunner.damage);
                events.push(PresentationEvent::Damage {
                    target: DamageTarget::Player,
                    amount: dealt,
                });
                gunner.cooldown = gunner.shoot_every;
            }
        }

        if let Some(summoner) = summoner {
            let (timer, due) = tick_summon(summoner.timer, summoner.every, dt);
            summoner.timer = timer;
            if due {
                summons.push((position, summoner.count));
            }
        }
    }

    for (boss_position, count) in summons {
        let spawned = world_setup::summon_minions(
            world,
            rng,
            query,
            boss_position,
            count,
            wave.wave,
            wave.minion_cap,
            events,
        );
        log::debug!("boss summoned {spawned} of {count} minions");
    }
}
