//! Fixed perspective camera looking down at the play field

use glam::{Mat4, Vec3};

/// Vertical field of view (degrees)
pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;
/// Eye position, above and behind the origin
pub const EYE: Vec3 = Vec3::new(0.0, 50.0, 40.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Viewport width / height
    pub aspect: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            eye: EYE,
            target: Vec3::ZERO,
            aspect: 1.0,
        };
        camera.resize(width, height);
        camera
    }

    /// Track a new viewport size; zero-sized viewports are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Combined projection * view matrix
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}
