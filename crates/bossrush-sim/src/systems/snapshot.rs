//! Snapshot system: queries the world and engine state and builds a
//! complete GameStateSnapshot.
//!
//! This system is read-only.

use hecs::World;

use bossrush_core::components::{Enemy, ModelScale, Transform};
use bossrush_core::enums::{EnemyArchetype, GamePhase};
use bossrush_core::events::PresentationEvent;
use bossrush_core::state::*;
use bossrush_core::types::SimTime;

use crate::effects::EffectState;
use crate::player::{InputState, PlayerState};
use crate::wave::WaveState;
use crate::weapon::WeaponState;
use crate::world_setup::enemy_id;

/// Everything the snapshot reads, borrowed from the engine.
pub struct SnapshotSources<'a> {
    pub world: &'a World,
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub player: &'a PlayerState,
    pub input: &'a InputState,
    pub weapon: &'a WeaponState,
    pub wave: &'a WaveState,
    pub effects: &'a EffectState,
    pub kills: u32,
}

/// Build a complete snapshot, moving this tick's events into it.
pub fn build_snapshot(src: &SnapshotSources, events: Vec<PresentationEvent>) -> GameStateSnapshot {
    let enemies = build_enemies(src.world);
    let boss_alive = enemies
        .iter()
        .any(|e| e.archetype == EnemyArchetype::Boss);
    let minion_count = enemies
        .iter()
        .filter(|e| e.archetype == EnemyArchetype::Minion)
        .count() as u32;

    GameStateSnapshot {
        time: *src.time,
        phase: src.phase,
        player: build_player(src.player, src.effects),
        hud: build_hud(src, enemies.len() as u32),
        wave: WaveView {
            wave: src.wave.wave,
            phase: src.wave.phase,
            boss_alive,
            minion_count,
            minion_cap: src.wave.minion_cap as u32,
        },
        enemies,
        effects: src.effects.views(),
        events,
    }
}

fn build_player(player: &PlayerState, effects: &EffectState) -> PlayerView {
    PlayerView {
        position: player.position,
        eye: player.eye(),
        yaw: player.view.yaw,
        pitch: player.view.pitch,
        fov: player.fov,
        horizontal_speed: player.horizontal_speed(),
        grounded: player.grounded,
        stance: player.stance,
        recoil: effects.recoil(),
    }
}

fn build_hud(src: &SnapshotSources, enemy_count: u32) -> HudView {
    let weapon = src.weapon;
    HudView {
        health: src.player.health,
        weapon: weapon.id,
        weapon_name: weapon.def().name.to_string(),
        ammo_in_mag: weapon.ammo_in_mag,
        ammo_reserve: weapon.reserve,
        reloading: weapon.reloading,
        ads: src.input.aim,
        wave: src.wave.wave,
        enemy_count,
        kills: src.kills,
    }
}

/// Enemy list sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Transform, &ModelScale)>()
        .iter()
        .map(|(entity, (enemy, transform, scale))| EnemyView {
            id: enemy_id(entity),
            archetype: enemy.archetype,
            position: transform.position,
            yaw: transform.yaw,
            hp: enemy.hp,
            scale: scale.0,
            moving: enemy.moving,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
