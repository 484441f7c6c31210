//! CPU-side scene that turns attached boxes into triangles

use std::collections::HashMap;

use glam::Vec3;

use super::shapes;
use super::vertex::Vertex;
use crate::scene::{Renderable, Scene};
use crate::sim::{BodyId, GROUND_ID};
use crate::unpack_rgb;

/// Registry of attached boxes, drawn back to front
#[derive(Debug, Default)]
pub struct MeshScene {
    nodes: HashMap<BodyId, Renderable>,
}

impl MeshScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Build the frame's triangle list as seen from `eye`
    ///
    /// The ground goes first, then the rest far to near, so later boxes
    /// paint over earlier ones without a depth buffer.
    pub fn vertices(&self, eye: Vec3) -> Vec<Vertex> {
        let mut order: Vec<(BodyId, &Renderable)> =
            self.nodes.iter().map(|(id, node)| (*id, node)).collect();
        order.sort_by(|(a_id, a), (b_id, b)| {
            let a_dist = a.position.distance_squared(eye);
            let b_dist = b.position.distance_squared(eye);
            (*a_id != GROUND_ID)
                .cmp(&(*b_id != GROUND_ID))
                .then(b_dist.total_cmp(&a_dist))
                .then(a_id.cmp(b_id))
        });

        let mut vertices = Vec::with_capacity(order.len() * shapes::CUBOID_VERTEX_COUNT);
        for (_, node) in order {
            vertices.extend(shapes::cuboid(node.position, node.size, unpack_rgb(node.color)));
        }
        vertices
    }
}

impl Scene for MeshScene {
    fn attach(&mut self, id: BodyId, node: Renderable) {
        self.nodes.insert(id, node);
    }

    fn detach(&mut self, id: BodyId) {
        self.nodes.remove(&id);
    }

    fn set_position(&mut self, id: BodyId, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
        }
    }
}
