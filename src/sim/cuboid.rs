//! Axis-aligned rigid boxes and ground contact resolution

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::consts::{BOUNCE_DAMPING, GRAVITY};

/// How a falling box is resolved when it reaches the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroundContact {
    /// Snap onto the ground and kill vertical velocity (arena game)
    #[default]
    StopOnLanding,
    /// Snap onto the ground and reflect half of the vertical velocity (showcase)
    Bounce,
}

/// An axis-aligned box with simple per-frame kinematics
///
/// Dimensions are fixed at creation. Bounds are always derived from the
/// current position so they can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    /// Center point
    pub pos: DVec3,
    pub vel: DVec3,
    /// Constant acceleration along y (units/frame²)
    pub gravity: f64,
    /// Render color (0xRRGGBB), unused by the physics
    pub color: u32,
}

impl Cuboid {
    pub fn new(width: f64, height: f64, length: f64, color: u32, vel: DVec3, pos: DVec3) -> Self {
        Self {
            width,
            height,
            length,
            pos,
            vel,
            gravity: GRAVITY,
            color,
        }
    }

    /// Override the per-box gravity
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x - self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y - self.height / 2.0
    }

    #[inline]
    pub fn front(&self) -> f64 {
        self.pos.z + self.length / 2.0
    }

    #[inline]
    pub fn back(&self) -> f64 {
        self.pos.z - self.length / 2.0
    }

    /// Full extents as a vector (width, height, length)
    #[inline]
    pub fn size(&self) -> DVec3 {
        DVec3::new(self.width, self.height, self.length)
    }

    /// Y coordinate that puts this box's bottom face on `ground`'s top face
    #[inline]
    fn rest_height(&self, ground: &Cuboid) -> f64 {
        ground.top() + self.height / 2.0
    }

    /// Advance one frame and resolve contact with `ground`
    ///
    /// The ground itself is never updated.
    pub fn update(&mut self, ground: &Cuboid, contact: GroundContact) {
        self.vel.y += self.gravity;

        self.pos.x += self.vel.x;
        self.pos.z += self.vel.z;

        match contact {
            GroundContact::StopOnLanding => {
                // y advances before the check, so the box may dip into the
                // ground for the frame it is corrected
                self.pos.y += self.vel.y;
                if self.bottom() < ground.top() {
                    self.pos.y = self.rest_height(ground);
                    self.vel.y = 0.0;
                }
            }
            GroundContact::Bounce => {
                if self.bottom() <= ground.top() {
                    self.vel.y = -self.vel.y * BOUNCE_DAMPING;
                    self.pos.y = self.rest_height(ground);
                } else {
                    self.pos.y += self.vel.y;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ground() -> Cuboid {
        Cuboid::new(100.0, 1.0, 100.0, 0x32A852, DVec3::ZERO, DVec3::ZERO)
    }

    fn falling_cube() -> Cuboid {
        Cuboid::new(1.0, 1.0, 1.0, 0xFFFFFF, DVec3::ZERO, DVec3::new(0.0, 3.0, 0.0))
    }

    #[test]
    fn test_default_gravity() {
        assert_eq!(falling_cube().gravity, -0.02);
        assert_eq!(falling_cube().with_gravity(-0.1).gravity, -0.1);
    }

    #[test]
    fn test_ground_top() {
        assert_eq!(ground().top(), 0.5);
        assert_eq!(ground().bottom(), -0.5);
    }

    #[test]
    fn test_stop_policy_settles_on_ground() {
        let plane = ground();
        let mut cube = falling_cube();

        let mut landed_at = None;
        for frame in 0..200 {
            cube.update(&plane, GroundContact::StopOnLanding);
            if landed_at.is_none() && cube.vel.y == 0.0 {
                landed_at = Some(frame);
            }
            if landed_at.is_some() {
                assert!(cube.bottom() >= plane.top(), "sank at frame {frame}");
                assert_eq!(cube.pos.y, 1.0);
            }
        }
        assert!(landed_at.is_some(), "cube never landed");
    }

    #[test]
    fn test_stop_policy_snaps_after_advancing() {
        let plane = ground();
        let mut cube = falling_cube();
        cube.pos.y = 1.0;

        // Resting: gravity pulls it into the ground, then it is snapped back
        cube.update(&plane, GroundContact::StopOnLanding);
        assert_eq!(cube.pos.y, 1.0);
        assert_eq!(cube.vel.y, 0.0);
    }

    #[test]
    fn test_bounce_policy_halves_and_inverts() {
        let plane = ground();
        let mut cube = falling_cube();

        for _ in 0..200 {
            let contact = cube.bottom() <= plane.top();
            let pre_contact = cube.vel.y + cube.gravity;
            cube.update(&plane, GroundContact::Bounce);
            if contact {
                assert!(pre_contact < 0.0);
                assert!(cube.vel.y > 0.0);
                assert_eq!(cube.vel.y, -pre_contact * 0.5);
                assert_eq!(cube.pos.y, 1.0);
                return;
            }
        }
        panic!("cube never touched the ground");
    }

    #[test]
    fn test_horizontal_velocity_applies_under_both_policies() {
        let plane = ground();
        for contact in [GroundContact::StopOnLanding, GroundContact::Bounce] {
            let mut cube = falling_cube();
            cube.vel.x = 0.1;
            cube.vel.z = -0.1;
            cube.update(&plane, contact);
            assert_eq!(cube.pos.x, 0.1);
            assert_eq!(cube.pos.z, -0.1);
        }
    }

    proptest! {
        #[test]
        fn bounds_match_dimensions(
            w in 0.01f64..100.0,
            h in 0.01f64..100.0,
            l in 0.01f64..100.0,
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            z in -100.0f64..100.0,
            frames in 0usize..50,
        ) {
            let plane = ground();
            let mut cube = Cuboid::new(w, h, l, 0, DVec3::new(0.3, 0.0, -0.2), DVec3::new(x, y, z));
            for _ in 0..frames {
                cube.update(&plane, GroundContact::StopOnLanding);
            }
            let tol = 1e-3 * (1.0 + cube.pos.abs().max_element());
            prop_assert!((cube.right() - cube.left() - w).abs() <= tol);
            prop_assert!((cube.top() - cube.bottom() - h).abs() <= tol);
            prop_assert!((cube.front() - cube.back() - l).abs() <= tol);
        }
    }
}
