//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use grid_snake::audio::AudioManager;
    use grid_snake::renderer::RenderState;
    use grid_snake::renderer::pipeline::surface_size;
    use grid_snake::sim::{Cell, Direction, Snake};
    use grid_snake::{Key, Renderer, ScoreDisplay, Session, Settings, SoundEffects};

    const CANVAS_ID: &str = "gameCanvas";

    /// Score readout backed by DOM nodes
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            match self.document.get_element_by_id(id) {
                Some(el) => el.set_text_content(Some(text)),
                None => log::warn!("HUD element #{} missing", id),
            }
        }
    }

    impl ScoreDisplay for DomHud {
        fn set_score(&mut self, score: u32) {
            self.set_text("score", &score.to_string());
        }

        fn set_high_score(&mut self, high_score: u32) {
            self.set_text("highScore", &format!("High Score: {}", high_score));
        }

        fn show_game_over(&mut self, visible: bool) {
            if let Some(el) = self.document.get_element_by_id("gameOver") {
                let style = if visible { "display: block" } else { "display: none" };
                el.set_attribute("style", style).ok();
            }
        }
    }

    /// Browser collaborators bundled behind the frontend traits
    struct WebFrontend {
        render_state: Option<RenderState>,
        hud: DomHud,
        audio: AudioManager,
    }

    impl Renderer for WebFrontend {
        fn draw_frame(&mut self, snake: &Snake, food: Cell, direction: Direction) {
            if let Some(ref mut render_state) = self.render_state {
                render_state.draw_frame(snake, food, direction);
            }
        }
    }

    impl ScoreDisplay for WebFrontend {
        fn set_score(&mut self, score: u32) {
            self.hud.set_score(score);
        }

        fn set_high_score(&mut self, high_score: u32) {
            self.hud.set_high_score(high_score);
        }

        fn show_game_over(&mut self, visible: bool) {
            self.hud.show_game_over(visible);
        }
    }

    impl SoundEffects for WebFrontend {
        fn play_eat(&mut self) {
            self.audio.play_eat();
        }

        fn play_game_over(&mut self) {
            self.audio.play_game_over();
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        frontend: WebFrontend,
    }

    impl Game {
        /// Per-frame update + draw
        fn frame(&mut self, time: f64) {
            let Game { session, frontend } = self;
            session.frame(time, frontend);
        }

        fn key_down(&mut self, event: &KeyboardEvent) {
            // First key press counts as the user gesture that unlocks audio
            self.frontend.audio.resume();

            let name = event.key();
            match name.as_str() {
                "i" | "I" => self.session.toggle_autopilot(),
                "m" | "M" => {
                    let muted = self.frontend.audio.toggle_muted();
                    log::info!("Muted: {}", muted);
                }
                _ => {
                    if let Some(key) = Key::from_key_name(&name) {
                        // Keep arrows and space from scrolling the page
                        event.prevent_default();
                        let Game { session, frontend } = self;
                        session.key_down(key, frontend);
                    }
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Grid Snake starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size; a hidden or unlaid-out canvas still gets 1x1
        let (width, height) = surface_size(
            canvas.client_width(),
            canvas.client_height(),
            window.device_pixel_ratio(),
        );
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut session = Session::new(seed);
        if settings.autopilot {
            session.set_autopilot(true);
        }
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(surface, &adapter, width, height).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("Renderer unavailable: {} - rendering disabled", e);
                None
            }
        };

        let mut frontend = WebFrontend {
            render_state,
            hud: DomHud {
                document: document.clone(),
            },
            audio: AudioManager::new(&settings),
        };
        session.sync(&mut frontend);

        let game = Rc::new(RefCell::new(Game { session, frontend }));

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Grid Snake running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_down(&event);
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed, game loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use grid_snake::frontend::Headless;
    use grid_snake::sim::StepOutcome;
    use grid_snake::{Session, Settings};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs a headless autopilot game");
    log::info!("Run with `trunk serve` for the web version");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_file(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut session = Session::new(seed);
    session.set_autopilot(true);
    let mut frontend = Headless;

    let mut steps = 0u32;
    let mut frames = 0u32;
    while session.state.running && frames < MAX_FRAMES {
        let now = f64::from(frames) * FRAME_MS;
        if let Some(outcome) = session.frame(now, &mut frontend) {
            steps += 1;
            if let StepOutcome::Ate { score } = outcome {
                log::debug!("Ate at step {}, score {}", steps, score);
            }
        }
        frames += 1;
    }

    println!(
        "seed {}: score {} after {} steps (final speed {} ms/step, {})",
        seed,
        session.state.score,
        steps,
        session.state.speed_ms,
        if session.state.running { "still alive" } else { "crashed" }
    );
    log::info!("Headless run finished after {} frames", frames);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
