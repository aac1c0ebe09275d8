//! Player movement controller.
//!
//! Quake-style ground/air acceleration with friction, coyote time and a
//! jump buffer. Horizontal collision resolves X then Z against cover
//! footprints expanded by the player radius.

use glam::Vec2;

use bossrush_arena::WorldQuery;
use bossrush_core::constants::*;
use bossrush_core::enums::Stance;
use bossrush_core::types::{horizontal, smoothing_factor};

use crate::player::{InputState, PlayerState};

/// Normalized horizontal wish direction from held keys and camera yaw.
pub fn wish_direction(player: &PlayerState, input: &InputState) -> Vec2 {
    let forward = horizontal(player.view.flat_forward());
    let right = horizontal(player.view.right());
    let keys = input.keys;
    let axis = |pos: bool, neg: bool| pos as i32 as f32 - neg as i32 as f32;

    let wish = forward * axis(keys.forward, keys.back) + right * axis(keys.right, keys.left);
    wish.normalize_or_zero()
}

/// Speed cap for the current controls. Crouch wins over sprint.
pub fn max_speed(input: &InputState) -> f32 {
    if input.crouch {
        CROUCH_SPEED
    } else if input.sprint {
        SPRINT_SPEED
    } else {
        WALK_SPEED
    }
}

/// Scale `velocity` down by ground friction.
pub fn apply_friction(velocity: Vec2, dt: f32) -> Vec2 {
    let speed = velocity.length();
    if speed < FRICTION_MIN_SPEED {
        return Vec2::ZERO;
    }
    let new_speed = (speed - speed * GROUND_FRICTION * dt).max(0.0);
    velocity * (new_speed / speed)
}

/// Add velocity along `wish` without exceeding `max` in that direction.
pub fn accelerate(velocity: Vec2, wish: Vec2, max: f32, accel: f32, dt: f32) -> Vec2 {
    let add = max - velocity.dot(wish);
    if add <= 0.0 {
        return velocity;
    }
    velocity + wish * (accel * dt * max).min(add)
}

/// Advance the player body by `dt`.
pub fn run(player: &mut PlayerState, input: &InputState, world: &impl WorldQuery, dt: f32) {
    let wish = wish_direction(player, input);

    player.jump_buffer = (player.jump_buffer - dt).max(0.0);
    player.coyote = (player.coyote - dt).max(0.0);

    player.vertical_velocity -= GRAVITY * dt;
    if player.position.y <= 0.0 {
        player.position.y = 0.0;
        player.vertical_velocity = player.vertical_velocity.max(0.0);
        player.grounded = true;
        player.coyote = COYOTE_SECS;
    } else {
        if player.grounded {
            player.coyote = COYOTE_SECS;
        }
        player.grounded = false;
    }

    if player.jump_buffer > 0.0 && (player.grounded || player.coyote > 0.0) {
        player.vertical_velocity = JUMP_SPEED;
        player.grounded = false;
        player.coyote = 0.0;
        player.jump_buffer = 0.0;
    }

    player.stance = if input.crouch {
        Stance::Crouching
    } else {
        Stance::Standing
    };
    let max = max_speed(input);

    let mut velocity = player.velocity;
    if player.grounded {
        velocity = apply_friction(velocity, dt);
    }
    let accel = if player.grounded {
        GROUND_ACCEL
    } else {
        AIR_ACCEL
    };
    velocity = accelerate(velocity, wish, max, accel, dt).clamp_length_max(max);

    let next_x = player.position.x + velocity.x * dt;
    if world.blocks_player(next_x, player.position.z) {
        velocity.x = 0.0;
    } else {
        player.position.x = next_x;
    }
    let next_z = player.position.z + velocity.y * dt;
    if world.blocks_player(player.position.x, next_z) {
        velocity.y = 0.0;
    } else {
        player.position.z = next_z;
    }
    player.velocity = velocity;

    player.position.y = (player.position.y + player.vertical_velocity * dt).max(0.0);
    player.position = world.clamp_to_bounds(player.position);

    let t = smoothing_factor(VIEW_SMOOTHING_DECAY, dt);
    let eye_target = match player.stance {
        Stance::Standing => EYE_STAND,
        Stance::Crouching => EYE_CROUCH,
    };
    let fov_target = if input.aim { ADS_FOV } else { BASE_FOV };
    player.eye_height += (eye_target - player.eye_height) * t;
    player.fov += (fov_target - player.fov) * t;
}

