//! Best score
//!
//! A single integer persisted to LocalStorage as plain decimal text.

use crate::persistence;

/// Highest score reached on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "flappyDemonHighScore";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Interpret stored text; absent or unparseable data counts as zero
    pub fn parse(stored: Option<&str>) -> Self {
        let value = stored
            .and_then(|text| text.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Take `score` if it beats the current best; returns whether it did
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    pub fn load() -> Self {
        let stored = persistence::load_item(Self::STORAGE_KEY);
        let best = Self::parse(stored.as_deref());
        if stored.is_some() {
            log::info!("Loaded best score {}", best.value);
        } else {
            log::info!("No best score stored, starting from 0");
        }
        best
    }

    pub fn save(&self) {
        if persistence::save_item(Self::STORAGE_KEY, &self.value.to_string()) {
            log::info!("Best score saved ({})", self.value);
        }
    }
}
