//! Screen flow around the engine
//!
//! Menu -> Playing -> GameOver -> Playing ... The app owns the engine and
//! the best score, and tells the frame loop when to stop scheduling itself.

use crate::best_score::BestScore;
use crate::sim::{Engine, FrameOutcome};

/// Which screen the shell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// Whether the frame loop should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Debug)]
pub struct App {
    engine: Engine,
    screen: Screen,
    /// Final score of the last finished session
    last_score: u32,
    best: BestScore,
    new_best: bool,
}

impl App {
    pub fn new(engine: Engine, best: BestScore) -> Self {
        Self {
            engine,
            screen: Screen::Menu,
            last_score: 0,
            best,
            new_best: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Live score while playing, otherwise the last session's final score
    pub fn score(&self) -> u32 {
        match self.screen {
            Screen::Playing => self.engine.score(),
            Screen::Menu | Screen::GameOver => self.last_score,
        }
    }

    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    /// The last finished session set a new best
    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Begin a session from the menu or the game-over screen
    ///
    /// Returns false (and does nothing) while a session is already running.
    pub fn start_game(&mut self) -> bool {
        if self.screen == Screen::Playing {
            return false;
        }
        self.engine.start();
        self.last_score = 0;
        self.new_best = false;
        self.screen = Screen::Playing;
        true
    }

    /// Forward a flap to the engine; ignored outside of play
    pub fn flap(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.engine.apply_impulse();
        true
    }

    /// Run one frame of the current screen
    pub fn frame(&mut self) -> LoopControl {
        if self.screen != Screen::Playing {
            return LoopControl::Stop;
        }
        match self.engine.advance() {
            FrameOutcome::Running => LoopControl::Continue,
            FrameOutcome::GameOver { score } => {
                self.end_game(score);
                LoopControl::Stop
            }
        }
    }

    /// Session abandoned from outside (page hidden, navigation)
    pub fn teardown(&mut self) {
        if self.screen == Screen::Playing {
            log::info!("Session torn down at score {}", self.engine.score());
            self.screen = Screen::Menu;
        }
    }

    fn end_game(&mut self, score: u32) {
        self.last_score = score;
        self.screen = Screen::GameOver;
        self.new_best = self.best.record(score);
        if self.new_best {
            self.best.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence;
    use crate::tuning::Tuning;

    fn run_until_stop(app: &mut App) -> u32 {
        let mut frames = 0;
        while app.frame() == LoopControl::Continue {
            frames += 1;
            assert!(frames < 10_000);
        }
        frames + 1
    }

    #[test]
    fn test_starts_on_menu_without_advancing() {
        let mut app = App::new(Engine::with_seed(1), BestScore::default());
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.frame(), LoopControl::Stop);
        assert!(!app.flap());
        assert_eq!(app.engine().state().frame, 0);
    }

    #[test]
    fn test_full_session_flow() {
        let mut app = App::new(Engine::with_seed(2), BestScore::default());
        assert!(app.start_game());
        assert!(!app.start_game());
        assert_eq!(app.screen(), Screen::Playing);
        // The first game shown is the first session
        assert_eq!(app.engine().sessions(), 1);

        assert_eq!(run_until_stop(&mut app), 36);
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.score(), 0);
        assert!(!app.is_new_best());

        // Loop is stopped; stray frames do not advance the engine
        let frame = app.engine().state().frame;
        assert_eq!(app.frame(), LoopControl::Stop);
        assert_eq!(app.engine().state().frame, frame);
    }

    #[test]
    fn test_new_best_is_persisted() {
        // Barely any gravity and a gap covering the whole playfield: the
        // player drifts down slowly, passing several pipes before sinking
        let tuning = Tuning {
            gravity: 0.001,
            pipe_gap: 800.0,
            ..Default::default()
        };
        let mut app = App::new(Engine::new(tuning, 3), BestScore::new(0));
        app.start_game();
        run_until_stop(&mut app);

        let score = app.score();
        assert!(score >= 1);
        assert_eq!(app.screen(), Screen::GameOver);
        assert!(app.is_new_best());
        assert_eq!(app.best_score(), score);
        assert_eq!(
            persistence::load_item(BestScore::STORAGE_KEY),
            Some(score.to_string())
        );
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let mut app = App::new(Engine::with_seed(4), BestScore::new(9));
        app.start_game();
        run_until_stop(&mut app);
        assert_eq!(app.best_score(), 9);
        assert!(!app.is_new_best());
        assert_eq!(persistence::load_item(BestScore::STORAGE_KEY), None);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut app = App::new(Engine::with_seed(5), BestScore::default());
        app.start_game();
        run_until_stop(&mut app);

        assert!(app.start_game());
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.score(), 0);
        assert_eq!(app.engine().state().frame, 0);
        assert_eq!(app.frame(), LoopControl::Continue);
    }

    #[test]
    fn test_teardown_stops_advancing() {
        let mut app = App::new(Engine::with_seed(6), BestScore::default());
        app.start_game();
        for _ in 0..10 {
            app.frame();
        }
        app.teardown();
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.frame(), LoopControl::Stop);
        assert_eq!(app.engine().state().frame, 10);
        assert_eq!(app.best_score(), 0);
    }
}
