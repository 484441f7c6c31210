//! Axis-aligned bounding box overlap tests
//!
//! Boxes never rotate, so a collision is just an interval overlap on each of
//! the three axes. Bounds are inclusive: touching faces count as a hit.

use glam::DVec3;

use super::cuboid::Cuboid;

/// Snapshot of a box's extents on all three axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Inclusive overlap on x, y and z
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y = self.min.y <= other.max.y && self.max.y >= other.min.y;
        let z = self.max.z >= other.min.z && self.min.z <= other.max.z;
        x && y && z
    }
}

impl From<&Cuboid> for Aabb {
    fn from(b: &Cuboid) -> Self {
        Self {
            min: DVec3::new(b.left(), b.bottom(), b.back()),
            max: DVec3::new(b.right(), b.top(), b.front()),
        }
    }
}

/// Check whether two boxes overlap, using their current positions
#[inline]
pub fn boxes_collide(a: &Cuboid, b: &Cuboid) -> bool {
    Aabb::from(a).overlaps(&Aabb::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_at(x: f64, y: f64, z: f64) -> Cuboid {
        Cuboid::new(1.0, 1.0, 1.0, 0, DVec3::ZERO, DVec3::new(x, y, z))
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        assert!(boxes_collide(&unit_at(0.0, 1.0, 0.0), &unit_at(0.5, 1.2, -0.3)));
    }

    #[test]
    fn test_touching_faces_collide() {
        // a.right == b.left, overlapping on y and z
        let a = unit_at(0.0, 1.0, 0.0);
        let b = unit_at(1.0, 1.0, 0.0);
        assert_eq!(a.right(), b.left());
        assert!(boxes_collide(&a, &b));
        assert!(boxes_collide(&b, &a));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = unit_at(0.0, 1.0, 0.0);
        assert!(!boxes_collide(&a, &unit_at(1.01, 1.0, 0.0)));
        assert!(!boxes_collide(&a, &unit_at(0.0, 2.5, 0.0)));
        assert!(!boxes_collide(&a, &unit_at(0.0, 1.0, -1.5)));
    }

    #[test]
    fn test_player_resting_on_ground_touches_it() {
        let ground = Cuboid::new(100.0, 1.0, 100.0, 0, DVec3::ZERO, DVec3::ZERO);
        assert!(boxes_collide(&unit_at(0.0, 1.0, 0.0), &ground));
    }

    #[test]
    fn test_contained_box_collides() {
        let big = Cuboid::new(10.0, 10.0, 10.0, 0, DVec3::ZERO, DVec3::ZERO);
        assert!(boxes_collide(&big, &unit_at(1.0, 1.0, 1.0)));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -10.0f64..10.0, ay in -10.0f64..10.0, az in -10.0f64..10.0,
            bx in -10.0f64..10.0, by in -10.0f64..10.0, bz in -10.0f64..10.0,
            aw in 0.1f64..5.0, bw in 0.1f64..5.0,
        ) {
            let a = Cuboid::new(aw, aw, aw, 0, DVec3::ZERO, DVec3::new(ax, ay, az));
            let b = Cuboid::new(bw, bw, bw, 0, DVec3::ZERO, DVec3::new(bx, by, bz));
            prop_assert_eq!(boxes_collide(&a, &b), boxes_collide(&b, &a));
        }
    }
}
