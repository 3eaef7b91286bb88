//! Data-driven game balance
//!
//! Every number the simulation reads lives here. `Tuning::default()` is the
//! shipped balance; JSON overrides are used by tests and by the native demo.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning values for one engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Left edge of the player (never changes during a session)
    pub player_x: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spawn_interval: u64,
    pub pipe_spawn_margin: f32,
    pub ground_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_x: PLAYER_X,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spawn_interval: PIPE_SPAWN_INTERVAL,
            pipe_spawn_margin: PIPE_SPAWN_MARGIN,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Vertical line the player's bottom edge must not cross
    pub fn ground_line(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Player spawn height (vertical center of the playfield)
    pub fn player_start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }

    /// Half-open band `[low, high)` a new gap center is drawn from
    ///
    /// Collapses to a single point when the margins leave no room.
    pub fn spawn_band(&self) -> (f32, f32) {
        let low = self.pipe_spawn_margin;
        let high = self.playfield_height - self.pipe_gap - self.pipe_spawn_margin;
        (low, high.max(low))
    }

    /// Upper bound on simultaneously live pipes in steady state
    ///
    /// No spawning means no pipes. Pipes that never scroll pile up without
    /// bound, reported as `usize::MAX`.
    pub fn max_live_pipes(&self) -> usize {
        if self.pipe_spawn_interval == 0 {
            return 0;
        }
        let spacing = self.pipe_speed * self.pipe_spawn_interval as f32;
        if spacing <= 0.0 {
            return usize::MAX;
        }
        ((self.playfield_width / spacing).ceil() as usize).saturating_add(1)
    }
}
