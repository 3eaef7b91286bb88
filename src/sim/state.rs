//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Whether the session is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames advance normally
    Playing,
    /// Ground or pipe contact ended the session
    GameOver,
}

/// The falling demon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top edge, pixels from the top of the playfield
    pub y: f32,
    /// Pixels per frame, positive = falling
    pub velocity: f32,
}

impl Player {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }

    /// Display rotation in degrees (nose down while falling)
    pub fn tilt_degrees(&self) -> f32 {
        (self.velocity * 6.0).clamp(-25.0, 90.0)
    }
}

/// A pillar pair with a passable gap between the two solids
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Vertical middle of the gap
    pub gap_center: f32,
    /// Already counted towards the score
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }

    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Lower boundary of the top solid
    pub fn gap_top(&self, tuning: &Tuning) -> f32 {
        self.gap_center - tuning.pipe_gap / 2.0
    }

    /// Upper boundary of the bottom solid
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_center + tuning.pipe_gap / 2.0
    }

    /// Fully left of the playfield
    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        self.right(tuning) <= 0.0
    }
}

/// Complete state of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live pipes, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Frames simulated this session
    pub frame: u64,
    /// Pipes passed
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh session: centered player, no pipes
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(tuning.player_start_y()),
            pipes: Vec::new(),
            frame: 0,
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
