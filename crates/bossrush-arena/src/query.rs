//! World queries consumed by the simulation.
//!
//! `WorldQuery` is the seam between gameplay systems and static geometry.
//! The simulation only ever asks these questions; it never inspects
//! obstacles directly.

use glam::Vec3;

use bossrush_core::components::HitVolume;

use crate::layout::Arena;
use crate::los;

/// An enemy hit-volume offered to a ray cast.
#[derive(Debug, Clone, Copy)]
pub struct HitCandidate {
    /// Feet position of the enemy.
    pub feet: Vec3,
    pub volume: HitVolume,
}

/// Questions the simulation asks about the world.
pub trait WorldQuery {
    /// Whether `to` is visible from `from` past static cover.
    fn has_line_of_sight(&self, from: Vec3, to: Vec3) -> bool;

    /// Distance to the nearest static obstacle along a normalized ray.
    fn raycast_obstacles(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<f32>;

    /// Nearest candidate intersected by the ray, as (index, distance).
    /// `dir` must be normalized.
    fn raycast_nearest(
        &self,
        origin: Vec3,
        dir: Vec3,
        candidates: &[HitCandidate],
    ) -> Option<(usize, f32)>;

    /// Whether the player body would overlap cover at (x, z).
    fn blocks_player(&self, x: f32, z: f32) -> bool;

    /// Clamp a position into the playable bounds.
    fn clamp_to_bounds(&self, position: Vec3) -> Vec3;
}

impl WorldQuery for Arena {
    fn has_line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        los::has_line_of_sight(self, from, to)
    }

    fn raycast_obstacles(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<f32> {
        Arena::raycast_obstacles(self, origin, dir, max_dist)
    }

    fn raycast_nearest(
        &self,
        origin: Vec3,
        dir: Vec3,
        candidates: &[HitCandidate],
    ) -> Option<(usize, f32)> {
        nearest_candidate(origin, dir, candidates)
    }

    fn blocks_player(&self, x: f32, z: f32) -> bool {
        self.collides_at(x, z)
    }

    fn clamp_to_bounds(&self, position: Vec3) -> Vec3 {
        self.clamp(position)
    }
}

/// Closest capsule hit among `candidates`.
pub fn nearest_candidate(
    origin: Vec3,
    dir: Vec3,
    candidates: &[HitCandidate],
) -> Option<(usize, f32)> {
    candidates
        .iter()
        .enumerate()
        .filter_map(|(i, c)| {
            let (a, b) = c.volume.segment(c.feet);
            ray_capsule(origin, dir, a, b, c.volume.radius).map(|t| (i, t))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1))
}

/// Distance along a normalized ray to a capsule with segment `pa`-`pb` and
/// radius `radius`. Hits behind the origin are ignored.
pub fn ray_capsule(origin: Vec3, dir: Vec3, pa: Vec3, pb: Vec3, radius: f32) -> Option<f32> {
    let ba = pb - pa;
    let oa = origin - pa;
    let baba = ba.dot(ba);
    let bard = ba.dot(dir);
    let baoa = ba.dot(oa);
    let rdoa = dir.dot(oa);
    let oaoa = oa.dot(oa);

    let a = baba - bard * bard;
    if a > 1e-8 {
        let b = baba * rdoa - baoa * bard;
        let c = baba * oaoa - baoa * baoa - radius * radius * baba;
        let h = b * b - a * c;
        if h < 0.0 {
            return None;
        }
        let t = (-b - h.sqrt()) / a;
        let y = baoa + t * bard;
        if y > 0.0 && y < baba {
            return (t >= 0.0).then_some(t);
        }
        // Missed the cylinder body; try the cap on the side we hit.
        let cap = if y <= 0.0 { pa } else { pb };
        return ray_sphere(origin, dir, cap, radius);
    }

    // Ray parallel to the axis: only the caps can be hit first.
    [pa, pb]
        .into_iter()
        .filter_map(|cap| ray_sphere(origin, dir, cap, radius))
        .min_by(|x, y| x.total_cmp(y))
}

fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let h = b * b - c;
    if h < 0.0 {
        return None;
    }
    let t = -b - h.sqrt();
    (t >= 0.0).then_some(t)
}
