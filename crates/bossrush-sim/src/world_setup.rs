//! Enemy spawn factories and roster helpers.
//!
//! The hecs world is the enemy roster. Every spawn and despawn goes through
//! here so the matching presentation event is always emitted.

use glam::Vec3;
use hecs::{Entity, EntityBuilder, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bossrush_ai::fsm::{ring_position, summon_position};
use bossrush_ai::profiles::{boss_profile, initial_minion_count, minion_profile, EnemyProfile};
use bossrush_arena::WorldQuery;
use bossrush_core::components::*;
use bossrush_core::constants::*;
use bossrush_core::enums::EnemyArchetype;
use bossrush_core::events::PresentationEvent;

/// Stable wire id for an enemy entity.
pub fn enemy_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Spawn one enemy built from `profile` with its feet at `position`.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    profile: &EnemyProfile,
    events: &mut Vec<PresentationEvent>,
) -> Entity {
    let position = Vec3::new(position.x, 0.0, position.z);
    let enemy = Enemy {
        archetype: profile.archetype,
        hp: profile.hp,
        speed: profile.speed,
        standoff: profile.standoff,
        moving: false,
    };
    let gunner = Gunner {
        cooldown: rng.gen_range(ENEMY_FIRST_SHOT_MIN..ENEMY_FIRST_SHOT_MAX),
        shoot_every: profile.shoot_every,
        range: profile.shoot_range,
        damage: profile.damage,
        accuracy: profile.accuracy,
    };

    let mut builder = EntityBuilder::new();
    builder
        .add(Transform { position, yaw: 0.0 })
        .add(enemy)
        .add(gunner)
        .add(HitVolume::scaled(profile.scale))
        .add(ModelScale(profile.scale));
    if let Some(summon) = profile.summon {
        builder.add(Summoner {
            timer: 0.0,
            every: summon.every,
            count: summon.count,
        });
    }
    let entity = world.spawn(builder.build());

    events.push(PresentationEvent::EnemySpawned {
        id: enemy_id(entity),
        archetype: profile.archetype,
        position,
    });
    entity
}

/// Remove an enemy. Returns false if it was already gone, so callers can
/// rely on each enemy being removed exactly once.
pub fn despawn_enemy(
    world: &mut World,
    entity: Entity,
    events: &mut Vec<PresentationEvent>,
) -> bool {
    if world.despawn(entity).is_err() {
        return false;
    }
    events.push(PresentationEvent::EnemyDespawned {
        id: enemy_id(entity),
    });
    true
}

/// Remove every enemy.
pub fn clear_enemies(world: &mut World, events: &mut Vec<PresentationEvent>) {
    let entities: Vec<Entity> = world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
    for entity in entities {
        despawn_enemy(world, entity, events);
    }
}

pub fn minion_count(world: &World) -> usize {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, e)| e.archetype == EnemyArchetype::Minion)
        .count()
}

pub fn boss_alive(world: &World) -> bool {
    world
        .query::<&Enemy>()
        .iter()
        .any(|(_, e)| e.archetype == EnemyArchetype::Boss)
}

pub fn enemy_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

/// Spawn a fresh wave: one boss at the boss spawn and its escort in a ring
/// around it, never exceeding `minion_cap`.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &impl WorldQuery,
    wave: u32,
    minion_cap: usize,
    events: &mut Vec<PresentationEvent>,
) {
    let boss_pos = Vec3::from(BOSS_SPAWN);
    spawn_enemy(world, rng, boss_pos, &boss_profile(wave), events);

    let count = initial_minion_count(wave).min(minion_cap.saturating_sub(minion_count(world)));
    let profile = minion_profile(wave);
    for _ in 0..count {
        let pos = ring_position(rng, boss_pos, WAVE_RING_RADIUS_MIN, WAVE_RING_RADIUS_MAX);
        spawn_enemy(world, rng, arena.clamp_to_bounds(pos), &profile, events);
    }
}

/// Spawn up to `count` minions around a boss, limited by the cap.
/// Returns how many were spawned.
#[allow(clippy::too_many_arguments)]
pub fn summon_minions(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &impl WorldQuery,
    boss_position: Vec3,
    count: u32,
    wave: u32,
    minion_cap: usize,
    events: &mut Vec<PresentationEvent>,
) -> usize {
    let room = minion_cap.saturating_sub(minion_count(world));
    let count = (count as usize).min(room);
    let profile = minion_profile(wave);
    for _ in 0..count {
        let pos = summon_position(rng, boss_position);
        spawn_enemy(world, rng, arena.clamp_to_bounds(pos), &profile, events);
    }
    count
}
