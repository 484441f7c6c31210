//! Data-driven game constants
//!
//! Every number the simulation uses lives here so a variant can be described
//! as data. Two presets ship: the arena game with enemies, and the showcase
//! build that only has the bouncing player cube.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GroundContact;

/// When the player is allowed to start a jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpGate {
    /// Bottom face at or below the ground's top face
    Grounded,
    /// Center at or below the given height
    BelowHeight(f64),
}

/// Axis-aligned rectangle on the ground plane used to cull enemies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            x_min: LEVEL_X_MIN,
            x_max: LEVEL_X_MAX,
            z_min: LEVEL_Z_MIN,
            z_max: LEVEL_Z_MAX,
        }
    }
}

impl LevelBounds {
    /// True if (x, z) lies strictly outside the rectangle
    #[inline]
    pub fn is_outside(&self, x: f64, z: f64) -> bool {
        x < self.x_min || x > self.x_max || z < self.z_min || z > self.z_max
    }
}

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("level bounds are inverted on the {axis} axis ({min} >= {max})")]
    InvertedBounds { axis: char, min: f64, max: f64 },
    #[error("spawn interval must be at least one frame")]
    ZeroSpawnInterval,
    #[error("invalid tuning JSON: {0}")]
    Json(String),
}

/// Game balance and variant behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Whether enemies spawn at all
    pub enemies_enabled: bool,
    /// Ground contact rule for the player (enemies always stop on landing)
    pub player_contact: GroundContact,
    pub jump_gate: JumpGate,

    pub gravity: f64,
    pub move_step: f64,
    pub jump_velocity: f64,

    pub ground_size: [f64; 3],
    pub player_size: f64,
    pub player_start_y: f64,

    pub enemy_size: f64,
    pub enemy_spawn_y: f64,
    pub enemy_speed: f64,
    pub enemy_drift_y: f64,
    pub spawn_edge_offset: f64,
    pub spawn_spread: f64,
    pub spawn_interval: u64,

    pub level_bounds: LevelBounds,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::arena()
    }
}

impl Tuning {
    /// The full game: enemies, stop-on-landing, jump only when grounded
    pub fn arena() -> Self {
        Self {
            enemies_enabled: true,
            player_contact: GroundContact::StopOnLanding,
            jump_gate: JumpGate::Grounded,
            gravity: GRAVITY,
            move_step: MOVE_STEP,
            jump_velocity: JUMP_VELOCITY,
            ground_size: [GROUND_WIDTH, GROUND_HEIGHT, GROUND_LENGTH],
            player_size: PLAYER_SIZE,
            player_start_y: PLAYER_START_Y,
            enemy_size: ENEMY_SIZE,
            enemy_spawn_y: ENEMY_SPAWN_Y,
            enemy_speed: ENEMY_SPEED,
            enemy_drift_y: ENEMY_DRIFT_Y,
            spawn_edge_offset: SPAWN_EDGE_OFFSET,
            spawn_spread: SPAWN_SPREAD,
            spawn_interval: SPAWN_INTERVAL,
            level_bounds: LevelBounds::default(),
        }
    }

    /// Showcase build: no enemies, bouncy landings, jump below a height ceiling
    pub fn showcase() -> Self {
        Self {
            enemies_enabled: false,
            player_contact: GroundContact::Bounce,
            jump_gate: JumpGate::BelowHeight(SHOWCASE_JUMP_CEILING),
            ..Self::arena()
        }
    }

    /// Parse and validate tuning from JSON; missing fields take arena defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Json(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value can drive a sane simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("gravity", self.gravity),
            ("move_step", self.move_step),
            ("jump_velocity", self.jump_velocity),
            ("player_start_y", self.player_start_y),
            ("enemy_spawn_y", self.enemy_spawn_y),
            ("enemy_speed", self.enemy_speed),
            ("enemy_drift_y", self.enemy_drift_y),
            ("spawn_edge_offset", self.spawn_edge_offset),
            ("spawn_spread", self.spawn_spread),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { name, value });
            }
        }

        let positive = [
            ("ground_size.x", self.ground_size[0]),
            ("ground_size.y", self.ground_size[1]),
            ("ground_size.z", self.ground_size[2]),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        if let JumpGate::BelowHeight(h) = self.jump_gate {
            if !h.is_finite() {
                return Err(TuningError::NotFinite {
                    name: "jump_gate",
                    value: h,
                });
            }
        }

        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }

        let b = &self.level_bounds;
        for (axis, min, max) in [('x', b.x_min, b.x_max), ('z', b.z_min, b.z_max)] {
            if !min.is_finite() || !max.is_finite() {
                return Err(TuningError::NotFinite {
                    name: "level_bounds",
                    value: if min.is_finite() { max } else { min },
                });
            }
            if min >= max {
                return Err(TuningError::InvertedBounds { axis, min, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(Tuning::arena().validate(), Ok(()));
        assert_eq!(Tuning::showcase().validate(), Ok(()));
    }

    #[test]
    fn test_showcase_differs_only_in_variant_behavior() {
        let arena = Tuning::arena();
        let showcase = Tuning::showcase();
        assert!(!showcase.enemies_enabled);
        assert_eq!(showcase.player_contact, GroundContact::Bounce);
        assert_eq!(showcase.jump_gate, JumpGate::BelowHeight(1.5));
        assert_eq!(showcase.gravity, arena.gravity);
        assert_eq!(showcase.level_bounds, arena.level_bounds);
    }

    #[test]
    fn test_level_bounds_are_strict() {
        let b = LevelBounds::default();
        assert!(!b.is_outside(50.0, -50.0));
        assert!(b.is_outside(50.01, 0.0));
        assert!(b.is_outside(0.0, -50.01));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "spawn_interval": 30, "enemy_speed": 0.2 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.spawn_interval, 30);
        assert_eq!(tuning.enemy_speed, 0.2);
        assert_eq!(tuning.move_step, 0.25);
        assert!(tuning.enemies_enabled);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert_eq!(
            Tuning::from_json(r#"{ "spawn_interval": 0 }"#),
            Err(TuningError::ZeroSpawnInterval)
        );
        assert!(matches!(
            Tuning::from_json(r#"{ "player_size": -1.0 }"#),
            Err(TuningError::NotPositive { name: "player_size", .. })
        ));
        assert!(matches!(
            Tuning::from_json(
                r#"{ "level_bounds": { "x_min": 10, "x_max": -10, "z_min": -50, "z_max": 50 } }"#
            ),
            Err(TuningError::InvertedBounds { axis: 'x', .. })
        ));
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip_of_variant_fields() {
        let json = serde_json::to_string(&Tuning::showcase()).expect("serialize");
        let back = Tuning::from_json(&json).expect("parse");
        assert_eq!(back, Tuning::showcase());
    }
}
