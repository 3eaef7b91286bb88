//! Player preferences
//!
//! Persisted separately from the best score, as JSON.

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show FPS counter in the HUD
    pub show_fps: bool,
    /// Keep the player upright instead of tilting with velocity
    pub reduced_motion: bool,
    /// Swap to the high contrast palette
    pub high_contrast: bool,
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flappy_demon_settings";

    /// Parse stored JSON, falling back to defaults
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Player rotation to draw, respecting reduced motion
    pub fn effective_tilt(&self, tilt_degrees: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { tilt_degrees }
    }

    pub fn load() -> Self {
        match persistence::load_item(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded settings");
                Self::parse(&json)
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if persistence::save_item(Self::STORAGE_KEY, &json) {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::error!("Failed to serialize settings: {}", e),
        }
    }
}
