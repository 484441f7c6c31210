//! Game settings and preferences
//!
//! Read from LocalStorage as JSON, written by the hosting page. Only
//! preferences live here; game state is never saved.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which build of the game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameVariant {
    /// Full game with enemies
    #[default]
    Arena,
    /// Player cube only, with bouncy landings
    Showcase,
}

impl GameVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::Arena => "Arena",
            GameVariant::Showcase => "Showcase",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arena" | "game" => Some(GameVariant::Arena),
            "showcase" | "portfolio" => Some(GameVariant::Showcase),
            _ => None,
        }
    }

    /// Tuning preset for this variant
    pub fn tuning(&self) -> Tuning {
        match self {
            GameVariant::Arena => Tuning::arena(),
            GameVariant::Showcase => Tuning::showcase(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: GameVariant,
    /// Fixed RNG seed for reproducible enemy placement (None = time-based)
    pub seed: Option<u64>,
    /// Show the on-screen touch buttons
    pub touch_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: GameVariant::Arena,
            seed: None,
            touch_controls: true,
        }
    }
}

impl Settings {
    /// Create settings for a variant
    pub fn for_variant(variant: GameVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Tuning to start a session with
    pub fn tuning(&self) -> Tuning {
        self.variant.tuning()
    }

    /// Seed to use, falling back to `fallback` (usually the current time)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "cube_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
