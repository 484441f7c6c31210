//! Enemy batch spawning
//!
//! A batch is one enemy per level edge. Each enemy starts on its edge at a
//! random offset along it and drifts straight toward the opposite edge.

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cuboid::Cuboid;
use crate::consts::ENEMY_COLOR;
use crate::tuning::Tuning;

/// Level edge an enemy entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnEdge {
    /// Far edge (negative z), moving toward +z
    North,
    /// Near edge (positive z), moving toward -z
    South,
    /// Right edge (positive x), moving toward -x
    East,
    /// Left edge (negative x), moving toward +x
    West,
}

impl SpawnEdge {
    /// Spawn order within a batch
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::North,
        SpawnEdge::South,
        SpawnEdge::East,
        SpawnEdge::West,
    ];

    /// Unit direction of travel on the ground plane
    pub fn inward(self) -> DVec3 {
        match self {
            SpawnEdge::North => DVec3::Z,
            SpawnEdge::South => DVec3::NEG_Z,
            SpawnEdge::East => DVec3::NEG_X,
            SpawnEdge::West => DVec3::X,
        }
    }

    /// Spawn point given a position `along` the edge
    fn anchor(self, offset: f64, along: f64, y: f64) -> DVec3 {
        match self {
            SpawnEdge::North => DVec3::new(along, y, -offset),
            SpawnEdge::South => DVec3::new(along, y, offset),
            SpawnEdge::East => DVec3::new(offset, y, along),
            SpawnEdge::West => DVec3::new(-offset, y, along),
        }
    }
}

/// Build one enemy body entering from `edge`
pub fn spawn_enemy<R: Rng + ?Sized>(edge: SpawnEdge, tuning: &Tuning, rng: &mut R) -> Cuboid {
    let along = (rng.random::<f64>() - 0.5) * tuning.spawn_spread;
    let pos = edge.anchor(tuning.spawn_edge_offset, along, tuning.enemy_spawn_y);

    let mut vel = edge.inward() * tuning.enemy_speed;
    vel.y = tuning.enemy_drift_y;

    let size = tuning.enemy_size;
    Cuboid::new(size, size, size, ENEMY_COLOR, vel, pos).with_gravity(tuning.gravity)
}

/// Build a full batch, one enemy per edge, in `SpawnEdge::ALL` order
pub fn spawn_batch<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> [(SpawnEdge, Cuboid); 4] {
    SpawnEdge::ALL.map(|edge| (edge, spawn_enemy(edge, tuning, rng)))
}
