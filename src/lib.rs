//! Cube Dodge - A 3D cube dodging game on a ground plane
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rigid bodies, collisions, enemy lifecycle)
//! - `scene`: Adapter between simulation bodies and the renderable scene
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input mapping
//! - `tuning`: Data-driven game constants and variant presets
//! - `settings`: Persisted user preferences

pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{GameVariant, Settings};
pub use tuning::{Tuning, TuningError};

/// Reference-scale game constants
///
/// Units are world units per frame; the simulation advances once per display refresh.
pub mod consts {
    /// Default gravity applied to every box (units/frame²)
    pub const GRAVITY: f64 = -0.02;

    /// Ground plane dimensions (centered at the origin)
    pub const GROUND_WIDTH: f64 = 100.0;
    pub const GROUND_HEIGHT: f64 = 1.0;
    pub const GROUND_LENGTH: f64 = 100.0;

    /// Player cube edge length and spawn height
    pub const PLAYER_SIZE: f64 = 1.0;
    pub const PLAYER_START_Y: f64 = 3.0;

    /// Horizontal distance the player moves per frame while a direction is held
    pub const MOVE_STEP: f64 = 0.25;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f64 = 0.5;
    /// Showcase variant: the player may jump while at or below this height
    pub const SHOWCASE_JUMP_CEILING: f64 = 1.5;

    /// Enemy cube edge length and spawn height
    pub const ENEMY_SIZE: f64 = 1.0;
    pub const ENEMY_SPAWN_Y: f64 = 3.0;
    /// Inward horizontal speed of a freshly spawned enemy
    pub const ENEMY_SPEED: f64 = 0.1;
    /// Initial downward drift of a freshly spawned enemy
    pub const ENEMY_DRIFT_Y: f64 = -0.01;
    /// Distance from the origin of each spawn edge
    pub const SPAWN_EDGE_OFFSET: f64 = 40.0;
    /// Width of the band along a spawn edge that enemies are scattered over
    pub const SPAWN_SPREAD: f64 = 100.0;
    /// Frames between enemy batches
    pub const SPAWN_INTERVAL: u64 = 10;

    /// Enemy cull rectangle
    pub const LEVEL_X_MIN: f64 = -50.0;
    pub const LEVEL_X_MAX: f64 = 50.0;
    pub const LEVEL_Z_MIN: f64 = -50.0;
    pub const LEVEL_Z_MAX: f64 = 50.0;

    /// Vertical velocity retained (and inverted) on a bounce
    pub const BOUNCE_DAMPING: f64 = 0.5;

    /// Body colors (0xRRGGBB)
    pub const PLAYER_COLOR: u32 = 0xFFFFFF;
    pub const GROUND_COLOR: u32 = 0x32A852;
    pub const ENEMY_COLOR: u32 = 0xFF0000;
}

/// Convert a packed 0xRRGGBB color to linear-ish RGBA floats
#[inline]
pub fn unpack_rgb(color: u32) -> [f32; 4] {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    [r, g, b, 1.0]
}
