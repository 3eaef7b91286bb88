//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One `advance` per rendered frame, no substeps
//! - Seeded RNG only
//! - Pipes kept in creation order

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::{Rect, hits_ground, hits_pipe, pipe_rects, player_rect};
pub use engine::Engine;
pub use state::{GamePhase, GameState, Pipe, Player};
pub use tick::{FrameOutcome, spawn_pipe, tick};
