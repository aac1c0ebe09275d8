//! Line-of-sight against static cover.

use glam::Vec3;

use bossrush_core::constants::LOS_EPSILON;

use crate::layout::Arena;

/// Check line-of-sight between two points.
///
/// Casts a ray from `from` toward `to`. The path is clear if nothing is hit,
/// or if the nearest obstacle lies beyond `distance - LOS_EPSILON`. A box
/// containing `from` does not block: only surfaces the ray enters count.
pub fn has_line_of_sight(arena: &Arena, from: Vec3, to: Vec3) -> bool {
    let delta = to - from;
    let dist = delta.length();
    if dist <= LOS_EPSILON {
        return true;
    }
    let dir = delta / dist;

    match arena.raycast_obstacles(from, dir, f32::INFINITY) {
        None => true,
        Some(hit) => hit > dist - LOS_EPSILON,
    }
}
