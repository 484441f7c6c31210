//! Adapter between simulation bodies and the renderable scene
//!
//! The simulation only knows about `Cuboid`s. A `Scene` is whatever draws
//! them; `SceneSync` mirrors spawn/cull events and positions onto it.

use glam::Vec3;

use crate::sim::{BodyId, Cuboid, GROUND_ID, GameEvent, GameState, PLAYER_ID};

/// What the renderer needs to draw one box, in render precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub position: Vec3,
    /// Width, height, length
    pub size: Vec3,
    /// 0xRRGGBB
    pub color: u32,
}

impl From<&Cuboid> for Renderable {
    fn from(body: &Cuboid) -> Self {
        Self {
            position: body.pos.as_vec3(),
            size: body.size().as_vec3(),
            color: body.color,
        }
    }
}

/// A renderable registry
pub trait Scene {
    fn attach(&mut self, id: BodyId, node: Renderable);
    /// Detaching an unknown id is a no-op
    fn detach(&mut self, id: BodyId);
    fn set_position(&mut self, id: BodyId, position: Vec3);
}

/// Keeps a scene in step with a game state
#[derive(Debug, Default)]
pub struct SceneSync {
    initialized: bool,
}

impl SceneSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the ground and player; later calls do nothing
    pub fn init<S: Scene + ?Sized>(&mut self, state: &GameState, scene: &mut S) {
        if self.initialized {
            return;
        }
        scene.attach(GROUND_ID, Renderable::from(&state.ground));
        scene.attach(PLAYER_ID, Renderable::from(&state.player));
        self.initialized = true;
    }

    /// Apply pending events, then copy current positions
    ///
    /// Returns the events that were applied so the caller can react to them
    /// (for example, stop the frame loop on a collision).
    pub fn apply<S: Scene + ?Sized>(&mut self, state: &mut GameState, scene: &mut S) -> Vec<GameEvent> {
        self.init(state, scene);

        let events = state.take_events();
        for event in &events {
            match *event {
                GameEvent::EnemySpawned { id, .. } => {
                    if let Some(enemy) = state.enemies().iter().find(|e| e.id == id) {
                        scene.attach(id, Renderable::from(&enemy.body));
                    }
                }
                GameEvent::EnemyCulled { id } => scene.detach(id),
                GameEvent::Collision { .. } => {}
            }
        }

        scene.set_position(PLAYER_ID, state.player.pos.as_vec3());
        for enemy in state.enemies() {
            scene.set_position(enemy.id, enemy.body.pos.as_vec3());
        }

        events
    }
}
