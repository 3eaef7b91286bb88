//! Flappy Demon entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_demon::platform::{InputBoundary, RawInput};
    use flappy_demon::renderer::{Palette, RenderState, scene};
    use flappy_demon::sim::Engine;
    use flappy_demon::{App, BestScore, LoopControl, Screen, Settings};

    /// Game instance holding all state
    struct Game {
        app: App,
        settings: Settings,
        palette: Palette,
        input: InputBoundary,
        render_state: Option<RenderState>,
        /// Pending requestAnimationFrame handle, if the loop is scheduled
        raf_id: Option<i32>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let mut engine = Engine::with_seed(seed);
            engine.set_game_over_handler(|score| log::info!("Game over, final score {}", score));
            let settings = Settings::load();
            Self {
                app: App::new(engine, BestScore::load()),
                palette: Palette::for_settings(&settings),
                settings,
                input: InputBoundary::new(),
                render_state: None,
                raf_id: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one frame of the app and return whether to keep looping
        fn update(&mut self, time: f64) -> LoopControl {
            let control = self.app.frame();
            self.input.end_frame();

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            control
        }

        /// Render the current frame
        fn render(&mut self) {
            let engine = self.app.engine();
            let tilt = self
                .settings
                .effective_tilt(engine.state().player.tilt_degrees());
            let vertices = scene(engine.state(), engine.tuning(), &self.palette, tilt);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, self.palette.background) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let screen = self.app.screen();

            set_text(&document, "hud-score", &self.app.score().to_string());
            set_visible(&document, "hud-score", screen == Screen::Playing);
            set_text(&document, "hud-fps", &format!("{} fps", self.fps));
            set_visible(&document, "hud-fps", self.settings.show_fps);

            set_visible(&document, "menu", screen == Screen::Menu);
            set_visible(&document, "game-over", screen == Screen::GameOver);
            if screen == Screen::GameOver {
                set_text(&document, "final-score", &self.app.score().to_string());
                set_text(&document, "best-score", &self.app.best_score().to_string());
                set_visible(&document, "new-best", self.app.is_new_best());
            }
        }

        /// Apply a settings change and persist it
        fn update_settings(&mut self, change: impl FnOnce(&mut Settings)) {
            change(&mut self.settings);
            self.palette = Palette::for_settings(&self.settings);
            self.settings.save();
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Demon starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        set_visible(&document, "loading", false);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let playfield = {
            let g = game.borrow();
            let tuning = g.app.engine().tuning();
            glam::Vec2::new(tuning.playfield_width, tuning.playfield_height)
        };
        let render_state = RenderState::new(surface, &adapter, width, height, playfield).await;
        {
            let mut g = game.borrow_mut();
            g.render_state = Some(render_state);
            // Draw the idle playfield behind the menu
            g.render();
            g.update_hud();
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_teardown(game);

        log::info!("Flappy Demon ready");
    }

    /// Start a session and make sure exactly one frame loop is running
    fn start_session(game: &Rc<RefCell<Game>>) {
        let needs_loop = {
            let mut g = game.borrow_mut();
            if !g.app.start_game() {
                return;
            }
            g.update_hud();
            g.raf_id.is_none()
        };
        if needs_loop {
            request_animation_frame(game.clone());
        }
    }

    fn handle_raw_input(game: &Rc<RefCell<Game>>, raw: RawInput) {
        let mut g = game.borrow_mut();
        if g.input.accept(&raw) {
            g.app.flap();
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space flaps, F/C/M toggle settings
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let raw = RawInput::Key {
                    code: event.code(),
                    repeat: event.repeat(),
                };
                if raw.is_flap_control() {
                    event.prevent_default();
                    handle_raw_input(&game, raw);
                    return;
                }
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyF" => g.update_settings(|s| s.show_fps = !s.show_fps),
                    "KeyC" => g.update_settings(|s| s.high_contrast = !s.high_contrast),
                    "KeyM" => g.update_settings(|s| s.reduced_motion = !s.reduced_motion),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                handle_raw_input(&game, RawInput::Click);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                handle_raw_input(&game, RawInput::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let loop_game = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(loop_game, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => game.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn cancel_animation_frame(game: &Rc<RefCell<Game>>) {
        if let Some(id) = game.borrow_mut().raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = {
            let mut g = game.borrow_mut();
            g.raf_id = None;
            let control = g.update(time);
            g.render();
            g.update_hud();
            control
        };

        // Termination: do not schedule another frame
        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    // Keep the click from reaching the canvas as a flap
                    event.stop_propagation();
                    start_session(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Leaving the page ends the session and cancels the pending frame
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            cancel_animation_frame(&game);
            let mut g = game.borrow_mut();
            g.app.teardown();
            g.update_hud();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_demon::{App, BestScore, LoopControl};
    use flappy_demon::sim::Engine;

    env_logger::init();
    log::info!("Flappy Demon (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` to play");

    let seed: u64 = rand::random();
    let mut app = App::new(Engine::with_seed(seed), BestScore::load());
    app.start_game();

    let mut frames = 0u32;
    while frames < 100_000 {
        if autopilot_wants_flap(app.engine()) {
            app.flap();
        }
        frames += 1;
        if app.frame() == LoopControl::Stop {
            break;
        }
    }

    log::info!(
        "Seed {}: score {} after {} frames (best {})",
        seed,
        app.score(),
        frames,
        app.best_score()
    );
}

/// Flap when falling below the middle of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flap(engine: &flappy_demon::sim::Engine) -> bool {
    let state = engine.state();
    let tuning = engine.tuning();
    let target = state
        .pipes
        .iter()
        .find(|pipe| pipe.right(tuning) >= tuning.player_x)
        .map(|pipe| pipe.gap_center)
        .unwrap_or_else(|| tuning.player_start_y());
    let player_center = state.player.y + tuning.player_height / 2.0;
    player_center > target + 20.0 && state.player.velocity >= 0.0
}
