//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Injected RNG only
//! - Stable iteration order (enemies in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod cuboid;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, boxes_collide};
pub use cuboid::{Cuboid, GroundContact};
pub use spawn::{SpawnEdge, spawn_batch, spawn_enemy};
pub use state::{BodyId, Enemy, GROUND_ID, GameEvent, GamePhase, GameState, PLAYER_ID};
pub use tick::{TickInput, tick};
