//! Arena layout: playable bounds plus static cover boxes.

use glam::Vec3;

use bossrush_core::constants::{MAP_HALF, PLAYER_RADIUS};

use crate::aabb::Aabb;

/// Height of the boundary walls (meters).
const WALL_HEIGHT: f32 = 12.0;

/// Static world geometry.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Half-extent of the playable square on X and Z.
    pub half_extent: f32,
    /// Solid boxes: boundary walls and cover.
    pub obstacles: Vec<Aabb>,
    /// Collision radius used for player movement.
    pub player_radius: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::standard()
    }
}

impl Arena {
    /// Empty arena with the given bounds and no obstacles.
    pub fn open(half_extent: f32) -> Self {
        Self {
            half_extent,
            obstacles: Vec::new(),
            player_radius: PLAYER_RADIUS,
        }
    }

    /// The standard map: boundary walls just outside the playable square
    /// and seven pieces of cover.
    pub fn standard() -> Self {
        let mut arena = Self::open(MAP_HALF);
        let h = MAP_HALF;
        let span = h * 2.0 + 40.0;

        // Boundary walls.
        arena.add_box(0.0, -h - 8.0, span, WALL_HEIGHT, 2.0);
        arena.add_box(0.0, h + 8.0, span, WALL_HEIGHT, 2.0);
        arena.add_box(-h - 8.0, 0.0, 2.0, WALL_HEIGHT, span);
        arena.add_box(h + 8.0, 0.0, 2.0, WALL_HEIGHT, span);

        // Cover.
        arena.add_box(0.0, 0.0, 18.0, 5.0, 12.0);
        arena.add_box(-40.0, 22.0, 12.0, 7.0, 18.0);
        arena.add_box(45.0, -26.0, 18.0, 5.0, 12.0);
        arena.add_box(65.0, 48.0, 12.0, 9.0, 22.0);
        arena.add_box(-70.0, -45.0, 18.0, 5.0, 18.0);
        arena.add_box(15.0, 70.0, 24.0, 5.0, 12.0);
        arena.add_box(-20.0, -78.0, 26.0, 5.0, 14.0);

        arena
    }

    /// Add a ground-resting box centred on (x, z).
    pub fn add_box(&mut self, x: f32, z: f32, width: f32, height: f32, depth: f32) -> &mut Self {
        self.obstacles
            .push(Aabb::on_ground(x, z, width, height, depth));
        self
    }

    /// Whether a player standing at (x, z) overlaps any obstacle footprint.
    /// Obstacles are treated as infinitely tall.
    pub fn collides_at(&self, x: f32, z: f32) -> bool {
        self.obstacles
            .iter()
            .any(|b| b.contains_xz(x, z, self.player_radius))
    }

    /// Clamp X and Z into the playable square, leaving Y untouched.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_extent, self.half_extent),
            position.y,
            position.z.clamp(-self.half_extent, self.half_extent),
        )
    }

    /// Distance to the nearest obstacle along a ray, if any within
    /// `max_dist`. `dir` must be normalized.
    pub fn raycast_obstacles(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<f32> {
        self.obstacles
            .iter()
            .filter_map(|b| b.ray_intersect(origin, dir))
            .filter(|&t| t <= max_dist)
            .min_by(|a, b| a.total_cmp(b))
    }
}
