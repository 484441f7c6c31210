//! Per-frame simulation step
//!
//! One call advances the whole game by one display frame: enemies move and
//! are checked against the player and the level bounds, a new batch spawns on
//! the spawn gate, culled enemies are dropped, then the player moves.

use rand::Rng;

use super::collision::boxes_collide;
use super::cuboid::GroundContact;
use super::spawn::spawn_batch;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::JumpGate;

/// Player intents sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Toward -z (away from the camera)
    pub move_forward: bool,
    /// Toward +z (toward the camera)
    pub move_back: bool,
    pub jump: bool,
}

/// Advance the game state by one frame
///
/// Does nothing once the session is over. `rng` only feeds enemy placement.
/// Events accumulate on the state until the caller drains them with
/// `GameState::take_events` (`SceneSync::apply` does this), so drain once per
/// frame.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    if state.tuning.enemies_enabled {
        update_enemies(state);

        if state.frames.checked_rem(state.tuning.spawn_interval) == Some(0) {
            spawn_enemies(state, rng);
        }

        remove_culled(state);
    }

    state.frames += 1;

    update_player(state, input);
}

/// Single pass over live enemies: physics, player contact, bounds
fn update_enemies(state: &mut GameState) {
    let ground = &state.ground;
    let player = &state.player;
    let bounds = state.tuning.level_bounds;

    let mut hit = None;
    for enemy in state.enemies.iter_mut() {
        enemy.body.update(ground, GroundContact::StopOnLanding);

        if hit.is_none() && boxes_collide(player, &enemy.body) {
            hit = Some(enemy.id);
        }

        if bounds.is_outside(enemy.body.pos.x, enemy.body.pos.z) {
            state.cull_queue.push(enemy.id);
        }
    }

    // The rest of this frame still runs; later ticks are skipped
    if let Some(enemy_id) = hit {
        log::info!("collision with enemy {} at frame {}", enemy_id, state.frames);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Collision { enemy_id });
    }
}

fn spawn_enemies<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    for (edge, body) in spawn_batch(&state.tuning, rng) {
        let id = state.add_enemy(edge, body);
        log::debug!("spawned enemy {} from {:?}", id, edge);
    }
}

/// Drop every enemy queued for culling this frame
fn remove_culled(state: &mut GameState) {
    if state.cull_queue.is_empty() {
        return;
    }

    let queue = std::mem::take(&mut state.cull_queue);
    state.enemies.retain(|e| !queue.contains(&e.id));
    for id in queue {
        log::debug!("culled enemy {}", id);
        state.events.push(GameEvent::EnemyCulled { id });
    }
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.update(&state.ground, tuning.player_contact);

    let step = tuning.move_step;
    if input.move_right {
        player.pos.x += step;
    }
    if input.move_left {
        player.pos.x -= step;
    }
    if input.move_back {
        player.pos.z += step;
    }
    if input.move_forward {
        player.pos.z -= step;
    }

    let can_jump = match tuning.jump_gate {
        JumpGate::Grounded => player.bottom() <= state.ground.top(),
        JumpGate::BelowHeight(ceiling) => player.pos.y <= ceiling,
    };
    if input.jump && can_jump {
        player.vel.y = tuning.jump_velocity;
    }
}
