//! Archetype-specific stat profiles.
//!
//! Every enemy is built from a fully specified `EnemyProfile`; there are no
//! optional fields to default at the spawn site. Stats scale monotonically
//! with the wave number and are floored or capped so late waves stay sane.

use bossrush_core::constants::{BOSS_STANDOFF, MINION_STANDOFF, SUMMON_COUNT};
use bossrush_core::enums::EnemyArchetype;

/// Boss-only reinforcement behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummonProfile {
    /// Seconds between summons.
    pub every: f32,
    /// Minions per summon.
    pub count: u32,
}

/// Complete stat block for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub archetype: EnemyArchetype,
    pub hp: i32,
    /// Movement speed (m/s).
    pub speed: f32,
    /// Seconds between pistol shots.
    pub shoot_every: f32,
    /// Horizontal firing range (m).
    pub shoot_range: f32,
    /// Damage per shot to the player.
    pub damage: i32,
    /// Aim jitter per axis (radians).
    pub accuracy: f32,
    /// Preferred distance to the player (m).
    pub standoff: f32,
    /// Model and hit-volume scale.
    pub scale: f32,
    pub summon: Option<SummonProfile>,
}

/// Get the profile for an archetype at a given wave (1-based).
pub fn get_profile(archetype: EnemyArchetype, wave: u32) -> EnemyProfile {
    match archetype {
        EnemyArchetype::Boss => boss_profile(wave),
        EnemyArchetype::Minion => minion_profile(wave),
    }
}

/// Wave leader. 60 hp on wave 1, +15 per wave.
pub fn boss_profile(wave: u32) -> EnemyProfile {
    let w = wave.max(1) as f32;
    EnemyProfile {
        archetype: EnemyArchetype::Boss,
        hp: 60 + 15 * (wave.max(1) as i32 - 1),
        speed: (1.7 + w * 0.03).min(4.0),
        shoot_every: (0.70 - w * 0.02).max(0.35),
        shoot_range: 85.0,
        damage: 9,
        accuracy: 0.02,
        standoff: BOSS_STANDOFF,
        scale: 1.4,
        summon: Some(SummonProfile {
            every: (12.0 - w * 0.5).max(5.0),
            count: SUMMON_COUNT,
        }),
    }
}

/// Pistol grunt.
pub fn minion_profile(wave: u32) -> EnemyProfile {
    let w = wave.max(1) as f32;
    EnemyProfile {
        archetype: EnemyArchetype::Minion,
        hp: 10 + (wave.max(1) / 2) as i32,
        speed: (2.4 + w * 0.02).min(4.5),
        shoot_every: (1.15 - w * 0.03).max(0.60),
        shoot_range: 70.0,
        damage: 6,
        accuracy: 0.035,
        standoff: MINION_STANDOFF,
        scale: 1.0,
        summon: None,
    }
}

/// Minions spawned with a fresh boss.
pub fn initial_minion_count(wave: u32) -> usize {
    (6 + wave as usize / 2).min(10)
}
