//! Game state and core simulation types
//!
//! Everything the frame step mutates lives in `GameState`. The driver owns it
//! and hands it to `tick` once per frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::cuboid::Cuboid;
use super::spawn::SpawnEdge;
use crate::consts::{GROUND_COLOR, PLAYER_COLOR};
use crate::tuning::Tuning;

/// Stable identifier of a body for the lifetime of a session
pub type BodyId = u32;

/// Reserved id of the ground plane
pub const GROUND_ID: BodyId = 0;
/// Reserved id of the player cube
pub const PLAYER_ID: BodyId = 1;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// The player touched an enemy; no further frames run
    GameOver,
}

/// Something that happened during a frame, for the scene and the log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new enemy entered from `edge`
    EnemySpawned { id: BodyId, edge: SpawnEdge },
    /// An enemy left the level bounds and was dropped
    EnemyCulled { id: BodyId },
    /// The player touched an enemy; the session is over
    Collision { enemy_id: BodyId },
}

/// An enemy cube
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: BodyId,
    pub edge: SpawnEdge,
    pub body: Cuboid,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Constants and variant behavior
    pub tuning: Tuning,
    /// Frames simulated so far (never reset)
    pub frames: u64,
    pub phase: GamePhase,
    /// Static ground plane, never updated
    pub ground: Cuboid,
    pub player: Cuboid,
    /// Live enemies in spawn order
    pub(crate) enemies: Vec<Enemy>,
    /// Enemies that left the bounds this frame, drained at end of frame
    pub(crate) cull_queue: Vec<BodyId>,
    /// Events not yet taken by the driver
    pub(crate) events: Vec<GameEvent>,
    next_id: BodyId,
}

impl GameState {
    /// Build the initial state for a variant: ground at the origin, player
    /// hovering above it, no enemies
    pub fn new(tuning: Tuning) -> Self {
        let [gw, gh, gl] = tuning.ground_size;
        let ground = Cuboid::new(gw, gh, gl, GROUND_COLOR, DVec3::ZERO, DVec3::ZERO)
            .with_gravity(0.0);

        let size = tuning.player_size;
        let player = Cuboid::new(
            size,
            size,
            size,
            PLAYER_COLOR,
            DVec3::ZERO,
            DVec3::new(0.0, tuning.player_start_y, 0.0),
        )
        .with_gravity(tuning.gravity);

        Self {
            tuning,
            frames: 0,
            phase: GamePhase::Running,
            ground,
            player,
            enemies: Vec::new(),
            cull_queue: Vec::new(),
            events: Vec::new(),
            next_id: PLAYER_ID + 1,
        }
    }

    /// Allocate a new body id
    ///
    /// Ids wrap past `BodyId::MAX` back to the first non-reserved id. A
    /// session would need billions of enemies to get there.
    pub fn next_body_id(&mut self) -> BodyId {
        let id = self.next_id;
        self.next_id = match self.next_id.checked_add(1) {
            Some(next) => next,
            None => PLAYER_ID + 1,
        };
        id
    }

    /// Live enemies, in spawn order
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Insert an enemy directly, bypassing the spawn gate
    pub fn add_enemy(&mut self, edge: SpawnEdge, body: Cuboid) -> BodyId {
        let id = self.next_body_id();
        self.enemies.push(Enemy { id, edge, body });
        self.events.push(GameEvent::EnemySpawned { id, edge });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_arena_state() {
        let state = GameState::new(Tuning::arena());
        assert_eq!(state.frames, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.enemies().is_empty());
        assert_eq!(state.player.pos, DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(state.player.vel, DVec3::ZERO);
        assert_eq!(state.ground.top(), 0.5);
        assert_eq!(state.ground.size(), DVec3::new(100.0, 1.0, 100.0));
    }

    #[test]
    fn test_body_ids_skip_reserved() {
        let mut state = GameState::new(Tuning::arena());
        let a = state.next_body_id();
        let b = state.next_body_id();
        assert!(a > PLAYER_ID && a > GROUND_ID);
        assert_eq!(b, a + 1);
    }

    #[test]
    fn test_body_ids_wrap_without_panicking() {
        let mut state = GameState::new(Tuning::arena());
        state.next_id = BodyId::MAX;
        assert_eq!(state.next_body_id(), BodyId::MAX);
        assert_eq!(state.next_body_id(), PLAYER_ID + 1);
    }
}
