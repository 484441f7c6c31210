//! Platform abstraction layer
//!
//! Maps browser keyboard and touch events to simulation intents. The browser
//! event wiring itself lives in the wasm entry point.

pub mod input;

pub use input::Intent;
