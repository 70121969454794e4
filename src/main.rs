//! Circle Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use circle_dodge::Settings;
    use circle_dodge::audio::AudioManager;
    use circle_dodge::consts::GAME_SIZE;
    use circle_dodge::platform::{Game, Key, PlatformError};
    use circle_dodge::renderer::{RenderState, TextOverlay, WebSurface};

    /// Everything the page callbacks share
    struct App {
        game: Game<AudioManager>,
        surface: WebSurface,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Run one animation frame
        fn frame(&mut self, time: f64) {
            let frame = self.game.update(time);
            match self.surface.present(&frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => self.surface.gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Match the backing store to the device pixel ratio
        fn fit_canvas(&mut self, window: &Window) {
            let (width, height) = apply_canvas_size(window, &self.canvas);
            self.surface.gpu.resize(width, height);
            self.surface.overlay.align_to(&self.canvas);
        }
    }

    /// Size the canvas to the logical field in CSS pixels, scaled by DPR in device pixels
    fn apply_canvas_size(window: &Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let css = format!("{}px", GAME_SIZE);
        let style = canvas.style();
        let _ = style.set_property("width", &css);
        let _ = style.set_property("height", &css);

        let size = (GAME_SIZE * dpr).round().max(1.0) as u32;
        canvas.set_width(size);
        canvas.set_height(size);
        (size, size)
    }

    pub async fn run() -> Result<(), PlatformError> {
        let (settings, settings_error) = Settings::load();

        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(settings.log_level.to_level()) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }
        if let Some(e) = settings_error {
            log::warn!("Ignoring malformed settings: {}", e);
        }

        log::info!("Circle Dodge starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;
        let body = document.body().ok_or(PlatformError::MissingElement("body"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(PlatformError::js)?
            .dyn_into()
            .map_err(|_| PlatformError::NotAnElement("canvas"))?;
        canvas.set_id("canvas");
        body.append_child(&canvas).map_err(PlatformError::js)?;

        let (width, height) = apply_canvas_size(&window, &canvas);

        // Initialize WebGPU, falling back to WebGL2
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let gpu = RenderState::new(surface, &adapter, width, height, GAME_SIZE as f32).await?;
        let overlay = TextOverlay::new(&document, &canvas)?;

        let start_time = window.performance().map(|p| p.now()).unwrap_or(0.0);
        let audio = AudioManager::new(&settings);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(audio, &settings, start_time),
            surface: WebSurface::new(gpu, overlay),
            canvas,
        }));

        setup_input_handlers(&window, app.clone());
        setup_resize_handler(&window, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Circle Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_key_name(&event.key()) else {
                    return;
                };
                // Keep space/arrows from scrolling the page
                event.prevent_default();

                let mut app = app.borrow_mut();
                app.game.audio().resume();
                app.game.key_down(key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    app.borrow_mut().game.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) {
        let win = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().fit_canvas(&win);
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Circle Dodge failed to start: {}", e);
    }
}

/// Headless run: an autopilot plays one round against the recording surface
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_dodge::Settings;
    use circle_dodge::audio::SilentAudio;
    use circle_dodge::platform::{Game, Key};
    use circle_dodge::renderer::RecordingSurface;
    use circle_dodge::sim::{GamePhase, calc_score};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    let (settings, settings_error) = Settings::load();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    if let Some(e) = settings_error {
        log::warn!("Ignoring malformed settings: {}", e);
    }

    log::info!("Circle Dodge (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let mut game = Game::new(SilentAudio, &settings, 0.0);
    let mut surface = RecordingSurface::default();
    let mut time = 0.0;

    game.key_down(Key::Confirm);
    for _ in 0..MAX_FRAMES {
        time += FRAME_MS;
        surface.clear();
        game.frame(time, &mut surface);

        if game.phase() == GamePhase::GameOver {
            break;
        }

        let (left, right) = autopilot::steer(game.state());
        for (held, key) in [(left, Key::Left), (right, Key::Right)] {
            if held {
                game.key_down(key);
            } else {
                game.key_up(key);
            }
        }
    }

    let state = game.state();
    log::info!(
        "Autopilot finished: {:?} after {:.1}s, score {} (high score {})",
        state.phase,
        state.round_time / 1000.0,
        calc_score(state.round_time),
        state.high_score
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use circle_dodge::consts::{CIRCLE_RADIUS, GAME_SIZE, PLAYER_HEIGHT};
    use circle_dodge::sim::{GameState, build_field};

    /// How far above the player obstacles are considered threats
    const LOOKAHEAD: f64 = CIRCLE_RADIUS * 8.0;
    /// Horizontal clearance the autopilot tries to keep
    const CLEARANCE: f64 = CIRCLE_RADIUS * 4.0;

    /// Pick which movement keys to hold: move away from the nearest incoming obstacle
    pub fn steer(state: &GameState) -> (bool, bool) {
        let x = state.player_x;
        let threat = build_field(state.round_y)
            .into_iter()
            .filter(|o| o.y <= PLAYER_HEIGHT + CIRCLE_RADIUS * 2.0)
            .filter(|o| PLAYER_HEIGHT - o.y < LOOKAHEAD)
            .filter(|o| (o.x - x).abs() < CLEARANCE)
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()));

        match threat {
            None => (false, false),
            Some(o) => {
                // Dodge away, unless the wall is in the way
                let go_left = if o.x > x { x > CLEARANCE } else { x > GAME_SIZE - CLEARANCE };
                (go_left, !go_left)
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
