//! Per-frame simulation step
//!
//! One call == one rendered frame. There is no substepping: velocities are
//! in pixels per frame and are integrated with a single Euler step.

use rand::Rng;

use super::collision::{above_ceiling, hits_ground, hits_pipe, player_rect};
use super::state::{GamePhase, GameState, Pipe};
use crate::tuning::Tuning;

/// What a frame produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Session continues
    Running,
    /// Session ended; `score` is what was banked before the fatal frame
    GameOver { score: u32 },
}

impl FrameOutcome {
    pub fn is_over(&self) -> bool {
        matches!(self, FrameOutcome::GameOver { .. })
    }
}

/// Create a pipe at the right edge with a random gap inside the spawn band
pub fn spawn_pipe<R: Rng>(tuning: &Tuning, rng: &mut R) -> Pipe {
    let (low, high) = tuning.spawn_band();
    let gap_center = if high > low {
        rng.random_range(low..high)
    } else {
        low
    };
    Pipe::new(tuning.playfield_width, gap_center)
}

/// Advance the game state by one frame
///
/// A fatal frame is never committed: `state` keeps the previous frame's
/// player, pipes, counter and score, and only flips to `GameOver`.
pub fn tick<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) -> FrameOutcome {
    if state.is_over() {
        return FrameOutcome::GameOver { score: state.score };
    }

    // Physics
    let mut player = state.player;
    player.velocity += tuning.gravity;
    player.y += player.velocity;

    // Scroll and recycle pipes
    let mut pipes: Vec<Pipe> = state
        .pipes
        .iter()
        .map(|pipe| Pipe {
            x: pipe.x - tuning.pipe_speed,
            ..*pipe
        })
        .filter(|pipe| !pipe.is_offscreen(tuning))
        .collect();

    let frame = state.frame + 1;
    if frame.is_multiple_of(tuning.pipe_spawn_interval) {
        let pipe = spawn_pipe(tuning, rng);
        log::trace!("Frame {}: pipe spawned, gap at {:.1}", frame, pipe.gap_center);
        pipes.push(pipe);
    }

    // Scoring
    let mut score = state.score;
    for pipe in pipes.iter_mut().filter(|p| !p.scored) {
        if pipe.right(tuning) < tuning.player_x {
            pipe.scored = true;
            score += 1;
        }
    }

    // Ground is always fatal
    if hits_ground(&player_rect(&player, tuning), tuning) {
        log::debug!("Frame {}: ground contact at y={:.1}", frame, player.y);
        return end_session(state);
    }

    // Ceiling only clamps; the pipe check below still runs
    if above_ceiling(&player_rect(&player, tuning)) {
        player.y = 0.0;
        player.velocity = 0.0;
    }

    let rect = player_rect(&player, tuning);
    if pipes.iter().any(|pipe| hits_pipe(&rect, pipe, tuning)) {
        log::debug!("Frame {}: pipe contact at y={:.1}", frame, player.y);
        return end_session(state);
    }

    state.player = player;
    state.pipes = pipes;
    state.frame = frame;
    state.score = score;
    FrameOutcome::Running
}

fn end_session(state: &mut GameState) -> FrameOutcome {
    state.phase = GamePhase::GameOver;
    FrameOutcome::GameOver { score: state.score }
}
