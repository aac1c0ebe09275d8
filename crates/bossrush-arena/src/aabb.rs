//! Axis-aligned boxes and ray/box intersection.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box resting on the ground, centred on (x, z) with the given
    /// width (X), height (Y) and depth (Z).
    pub fn on_ground(x: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width / 2.0, 0.0, depth / 2.0);
        let center = Vec3::new(x, 0.0, z);
        Self {
            min: center - half,
            max: center + half + Vec3::Y * height,
        }
    }

    /// Whether the ground-plane point (x, z) lies within the footprint grown
    /// by `radius` on every side. Edges count as inside.
    pub fn contains_xz(&self, x: f32, z: f32, radius: f32) -> bool {
        x >= self.min.x - radius
            && x <= self.max.x + radius
            && z >= self.min.z - radius
            && z <= self.max.z + radius
    }

    /// Entry distance of a ray into the box (slab method).
    ///
    /// Only front faces count: a ray that starts inside the box misses it.
    /// `dir` does not need to be normalized; the result is in units of `dir`.
    pub fn ray_intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < 1e-9 {
                // Parallel to this slab: must already be between the planes.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        // Negative entry: behind the origin, or the origin is inside.
        if t_enter < 0.0 {
            return None;
        }
        Some(t_enter)
    }
}
