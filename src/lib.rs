//! Flappy Demon - a single-screen flap-through-the-pillars arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (physics, pipes, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `app`: Menu / playing / game-over screen flow around the engine
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input boundary
//! - `persistence`: LocalStorage access (in-memory on native)

pub mod app;
pub mod best_score;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::{App, LoopControl, Screen};
pub use best_score::BestScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 500.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Fixed horizontal position of the player's left edge
    pub const PLAYER_X: f32 = PLAYFIELD_WIDTH / 4.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative = upward, pixels/frame)
    pub const JUMP_VELOCITY: f32 = -9.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 220.0;
    /// Leftward pipe scroll (pixels/frame)
    pub const PIPE_SPEED: f32 = 4.0;
    /// A new pipe appears every this many frames
    pub const PIPE_SPAWN_INTERVAL: u64 = 90;
    /// Minimum solid margin used when choosing a gap center
    pub const PIPE_SPAWN_MARGIN: f32 = 150.0;

    /// Height of the lava band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 40.0;
}
