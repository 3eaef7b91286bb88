//! Session owner around the frame step
//!
//! `Engine` holds the state of the current session, the pipe RNG and the
//! game-over handler. The shell calls `advance` once per rendered frame and
//! `apply_impulse` whenever a flap arrives.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::GameState;
use super::tick::{FrameOutcome, tick};
use crate::tuning::Tuning;

type GameOverHandler = Box<dyn FnMut(u32)>;

pub struct Engine {
    tuning: Tuning,
    state: GameState,
    rng: Pcg32,
    on_game_over: Option<GameOverHandler>,
    /// Sessions started, including the current one
    sessions: u32,
}

impl Engine {
    /// Create an engine with a fresh state ready to advance
    ///
    /// Only `start` counts as beginning a session.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let state = GameState::new(&tuning);
        Self {
            tuning,
            state,
            rng: Pcg32::seed_from_u64(seed),
            on_game_over: None,
            sessions: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    /// Discard the current session and begin a fresh one
    pub fn start(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.sessions += 1;
        log::info!("Session {} started", self.sessions);
    }

    /// Flap: velocity is overwritten, not added to
    pub fn apply_impulse(&mut self) {
        if self.state.is_over() {
            return;
        }
        self.state.player.velocity = self.tuning.jump_velocity;
    }

    /// Simulate one frame
    ///
    /// The game-over handler fires on the frame that ends the session and
    /// never again; later calls only repeat the final outcome.
    pub fn advance(&mut self) -> FrameOutcome {
        if self.state.is_over() {
            return FrameOutcome::GameOver {
                score: self.state.score,
            };
        }

        let outcome = tick(&mut self.state, &self.tuning, &mut self.rng);
        if let FrameOutcome::GameOver { score } = outcome {
            log::info!(
                "Session {} over after {} frames, score {}",
                self.sessions,
                self.state.frame,
                score
            );
            if let Some(handler) = self.on_game_over.as_mut() {
                handler(score);
            }
        }
        outcome
    }

    /// Replace the termination callback; it receives the final score
    pub fn set_game_over_handler(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_game_over = Some(Box::new(handler));
    }

    pub fn clear_game_over_handler(&mut self) {
        self.on_game_over = None;
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Sessions begun through `start`
    pub fn sessions(&self) -> u32 {
        self.sessions
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("sessions", &self.sessions)
            .field("has_handler", &self.on_game_over.is_some())
            .finish_non_exhaustive()
    }
}
