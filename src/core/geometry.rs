use glam::Vec3;

/// World-space ray; `dir` is expected to be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned box used for picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    #[inline]
    pub fn scaled(&self, s: f32) -> Self {
        Self::new(self.min * s, self.max * s)
    }
}

const PARALLEL_EPS: f32 = 1e-6;

/// Intersect a ray with the horizontal plane `y = plane_y`.
///
/// Returns `None` when the ray runs parallel to the plane or the plane lies
/// behind the ray origin.
#[inline]
pub fn ray_plane_y(ray: &Ray, plane_y: f32) -> Option<Vec3> {
    if ray.dir.y.abs() < PARALLEL_EPS {
        return None;
    }
    let t = (plane_y - ray.origin.y) / ray.dir.y;
    (t >= 0.0).then(|| ray.at(t))
}

/// Slab test. Returns the entry distance, or 0 when the origin is inside.
#[inline]
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);
        if d.abs() < PARALLEL_EPS {
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
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}
