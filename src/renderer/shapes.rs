//! Triangle generation for boxes

use glam::Vec3;

use super::vertex::{Vertex, shade};

/// One box face: outward normal, two in-plane axes with `u × v == normal`,
/// and its flat-shading factor
struct Face {
    normal: Vec3,
    u: Vec3,
    v: Vec3,
    shade: f32,
}

const FACES: [Face; 6] = [
    Face { normal: Vec3::X, u: Vec3::Y, v: Vec3::Z, shade: shade::RIGHT },
    Face { normal: Vec3::NEG_X, u: Vec3::Z, v: Vec3::Y, shade: shade::LEFT },
    Face { normal: Vec3::Y, u: Vec3::Z, v: Vec3::X, shade: shade::TOP },
    Face { normal: Vec3::NEG_Y, u: Vec3::X, v: Vec3::Z, shade: shade::BOTTOM },
    Face { normal: Vec3::Z, u: Vec3::X, v: Vec3::Y, shade: shade::FRONT },
    Face { normal: Vec3::NEG_Z, u: Vec3::Y, v: Vec3::X, shade: shade::BACK },
];

/// Vertices per box (6 faces, 2 triangles each)
pub const CUBOID_VERTEX_COUNT: usize = 36;

/// Generate counter-clockwise (seen from outside) triangles for an
/// axis-aligned box
pub fn cuboid(center: Vec3, size: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let mut vertices = Vec::with_capacity(CUBOID_VERTEX_COUNT);

    for face in &FACES {
        let [r, g, b, a] = color;
        let shaded = [r * face.shade, g * face.shade, b * face.shade, a];

        let corner = |su: f32, sv: f32| {
            let p = center + (face.normal + face.u * su + face.v * sv) * half;
            Vertex::new(p.x, p.y, p.z, shaded)
        };
        let c0 = corner(-1.0, -1.0);
        let c1 = corner(1.0, -1.0);
        let c2 = corner(1.0, 1.0);
        let c3 = corner(-1.0, 1.0);

        vertices.extend_from_slice(&[c0, c1, c2, c0, c2, c3]);
    }

    vertices
}
