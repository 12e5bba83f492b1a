use super::constants::*;
use super::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Fixed perspective camera shared by the renderer and pointer picking.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            fov_y: CAMERA_FOV_Y_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    #[inline]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    #[inline]
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Compute a world-space ray through normalized device coordinates.
    ///
    /// - `ndc`: x right, y up, both in `[-1, 1]`
    /// - `aspect`: viewport width / height
    pub fn ray_from_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inv = self.view_proj(aspect).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, (p1 - self.eye).normalize())
    }
}
