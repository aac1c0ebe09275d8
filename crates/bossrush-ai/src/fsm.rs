//! Enemy behavior: standoff movement, shot readiness and summoning.
//!
//! Pure functions over plain data. Line-of-sight and damage application are
//! left to the caller, which owns the world.

use glam::Vec3;
use rand::Rng;

use bossrush_core::constants::{
    RETREAT_SPEED_FACTOR, STANDOFF_TOLERANCE, SUMMON_RADIUS_MAX, SUMMON_RADIUS_MIN,
};
use bossrush_core::types::{yaw_towards, ViewAngles};

/// What an enemy does with its legs this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// Close the distance.
    Advance,
    /// Too close: back off.
    Retreat,
    /// Inside the standoff band.
    Hold,
}

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    /// Feet position.
    pub position: Vec3,
    /// Player feet position.
    pub player_position: Vec3,
    pub speed: f32,
    pub standoff: f32,
    /// Cooldown before this tick's decrement.
    pub shoot_cooldown: f32,
    pub shoot_range: f32,
    pub dt: f32,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub maneuver: Maneuver,
    /// Feet position after moving (not yet clamped to the arena).
    pub new_position: Vec3,
    /// Facing toward the player.
    pub yaw: f32,
    /// Horizontal distance to the player before moving.
    pub distance: f32,
    /// Cooldown after this tick's decrement (never negative).
    pub shoot_cooldown: f32,
    /// Cooldown elapsed and the player is inside firing range.
    /// The caller still has to confirm line-of-sight.
    pub wants_to_shoot: bool,
}

/// Pick a maneuver from the horizontal distance to the player.
pub fn choose_maneuver(distance: f32, standoff: f32) -> Maneuver {
    if distance > standoff + STANDOFF_TOLERANCE {
        Maneuver::Advance
    } else if distance < standoff - STANDOFF_TOLERANCE {
        Maneuver::Retreat
    } else {
        Maneuver::Hold
    }
}

/// Evaluate one enemy for one tick.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let mut to_player = ctx.player_position - ctx.position;
    to_player.y = 0.0;
    let distance = to_player.length();
    let dir = if distance > 1e-4 {
        to_player / distance
    } else {
        Vec3::ZERO
    };

    let maneuver = choose_maneuver(distance, ctx.standoff);
    let step = match maneuver {
        Maneuver::Advance => dir * ctx.speed * ctx.dt,
        Maneuver::Retreat => -dir * ctx.speed * RETREAT_SPEED_FACTOR * ctx.dt,
        Maneuver::Hold => Vec3::ZERO,
    };

    let shoot_cooldown = (ctx.shoot_cooldown - ctx.dt).max(0.0);

    EnemyUpdate {
        maneuver,
        new_position: ctx.position + step,
        yaw: yaw_towards(ctx.position, ctx.player_position),
        distance,
        shoot_cooldown,
        wants_to_shoot: shoot_cooldown == 0.0 && distance < ctx.shoot_range,
    }
}

/// Advance a summon timer. Returns the new timer and whether a summon is due.
pub fn tick_summon(timer: f32, every: f32, dt: f32) -> (f32, bool) {
    let timer = timer + dt;
    if timer >= every {
        (0.0, true)
    } else {
        (timer, false)
    }
}

/// Direction from `muzzle` to `target` jittered by up to `accuracy` radians
/// on the horizontal and vertical axes. Cosmetic: used for tracers only.
pub fn aim_direction<R: Rng>(rng: &mut R, muzzle: Vec3, target: Vec3, accuracy: f32) -> Vec3 {
    let base = (target - muzzle).normalize_or_zero();
    if base == Vec3::ZERO || accuracy <= 0.0 {
        return base;
    }
    let horizontal = Vec3::new(base.x, 0.0, base.z);
    let yaw = yaw_towards(Vec3::ZERO, horizontal);
    let basis = ViewAngles::new(yaw, 0.0);
    let jitter_h = rng.gen_range(-accuracy..=accuracy);
    let jitter_v = rng.gen_range(-accuracy..=accuracy);
    (base + basis.right() * jitter_h + Vec3::Y * jitter_v).normalize_or_zero()
}

/// Random point on an annulus around `center` on the ground plane.
pub fn ring_position<R: Rng>(rng: &mut R, center: Vec3, radius_min: f32, radius_max: f32) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius: f32 = rng.gen_range(radius_min..radius_max);
    Vec3::new(
        center.x + angle.cos() * radius,
        0.0,
        center.z + angle.sin() * radius,
    )
}

/// Spawn point for a summoned minion near its boss.
pub fn summon_position<R: Rng>(rng: &mut R, boss: Vec3) -> Vec3 {
    ring_position(rng, boss, SUMMON_RADIUS_MIN, SUMMON_RADIUS_MAX)
}
