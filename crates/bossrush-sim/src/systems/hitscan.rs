//! Hitscan resolution for player shots.
//!
//! Each pellet is an independent ray from the eye. Only enemies still in
//! the roster are offered to later pellets, so a kill is applied once.
//! Static cover does not stop player rounds.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bossrush_arena::{HitCandidate, WorldQuery};
use bossrush_core::components::{Enemy, HitVolume, Transform};
use bossrush_core::constants::{ADS_SPREAD_FACTOR, HITSCAN_RANGE, PLAYER_MUZZLE_OFFSET};
use bossrush_core::enums::{DamageTarget, EnemyArchetype, TracerColor};
use bossrush_core::events::PresentationEvent;
use bossrush_core::types::ViewAngles;
use bossrush_core::weapons::WeaponDef;

use crate::world_setup::{despawn_enemy, enemy_id};

/// What a single trigger pull did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotReport {
    /// Pellets that struck an enemy.
    pub hits: u32,
    /// Archetypes of enemies killed by this shot.
    pub kills: Vec<EnemyArchetype>,
}

/// Gun muzzle position for a camera at `eye`.
pub fn muzzle_position(eye: Vec3, view: &ViewAngles) -> Vec3 {
    let [right, up, forward] = PLAYER_MUZZLE_OFFSET;
    eye + view.right() * right + view.up() * up + view.forward() * forward
}

/// Camera forward nudged by up to `spread` along camera right and up.
pub fn pellet_direction(rng: &mut ChaCha8Rng, view: &ViewAngles, spread: f32) -> Vec3 {
    let dx = rng.gen_range(-spread..=spread);
    let dy = rng.gen_range(-spread..=spread);
    (view.forward() + view.right() * dx + view.up() * dy).normalize_or_zero()
}

fn live_candidates(world: &World) -> (Vec<Entity>, Vec<HitCandidate>) {
    world
        .query::<(&Enemy, &Transform, &HitVolume)>()
        .iter()
        .map(|(entity, (_, transform, volume))| {
            (
                entity,
                HitCandidate {
                    feet: transform.position,
                    volume: *volume,
                },
            )
        })
        .unzip()
}

/// Resolve every pellet of one shot from `eye` along `view`.
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    world: &mut World,
    query: &impl WorldQuery,
    rng: &mut ChaCha8Rng,
    eye: Vec3,
    view: &ViewAngles,
    def: &WeaponDef,
    ads: bool,
    events: &mut Vec<PresentationEvent>,
) -> ShotReport {
    let spread = if ads {
        def.spread * ADS_SPREAD_FACTOR
    } else {
        def.spread
    };
    let muzzle = muzzle_position(eye, view);
    let mut report = ShotReport::default();

    for _ in 0..def.pellets {
        let dir = pellet_direction(rng, view, spread);
        let (entities, candidates) = live_candidates(world);

        let Some((index, distance)) = query.raycast_nearest(eye, dir, &candidates) else {
            events.push(PresentationEvent::Tracer {
                from: muzzle,
                to: eye + dir * HITSCAN_RANGE,
                color: TracerColor::Player,
            });
            continue;
        };

        let entity = entities[index];
        events.push(PresentationEvent::Tracer {
            from: muzzle,
            to: eye + dir * distance,
            color: TracerColor::Player,
        });
        report.hits += 1;

        let killed = match world.get::<&mut Enemy>(entity) {
            Ok(mut enemy) => {
                enemy.hp -= def.damage;
                events.push(PresentationEvent::Damage {
                    target: DamageTarget::Enemy(enemy_id(entity)),
                    amount: def.damage,
                });
                (enemy.hp <= 0).then_some(enemy.archetype)
            }
            Err(_) => None,
        };

        if let Some(archetype) = killed {
            if despawn_enemy(world, entity, events) {
                log::debug!("{archetype:?} {} killed", enemy_id(entity));
                report.kills.push(archetype);
            }
        }
    }

    report
}
