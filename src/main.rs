//! Cube Dodge entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use cube_dodge::Settings;
    use cube_dodge::platform::Intent;
    use cube_dodge::renderer::{Camera, MeshScene, RenderState};
    use cube_dodge::scene::SceneSync;
    use cube_dodge::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        input: TickInput,
        sync: SceneSync,
        scene: MeshScene,
        camera: Camera,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64, width: u32, height: u32) -> Self {
            let mut game = Self {
                state: GameState::new(settings.tuning()),
                rng: Pcg32::seed_from_u64(seed),
                input: TickInput::default(),
                sync: SceneSync::new(),
                scene: MeshScene::new(),
                camera: Camera::new(width, height),
                render_state: None,
            };
            game.sync.init(&game.state, &mut game.scene);
            game
        }

        /// Simulate and draw one frame; returns false once the loop must stop
        fn frame(&mut self) -> bool {
            tick(&mut self.state, &self.input, &mut self.rng);

            let events = self.sync.apply(&mut self.state, &mut self.scene);
            let collided = events
                .iter()
                .any(|e| matches!(e, GameEvent::Collision { .. }));

            self.render();

            if collided {
                log::info!("Game over after {} frames", self.state.frames);
            }
            !self.state.is_over()
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = self.scene.vertices(self.camera.eye);
                match render_state.render(&vertices, self.camera.view_proj()) {
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

        fn resize(&mut self, width: u32, height: u32) {
            self.camera.resize(width, height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    /// Canvas backing-store size in physical pixels
    fn canvas_pixel_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cube Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("c")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = canvas_pixel_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        if !settings.touch_controls {
            if let Some(el) = document.get_element_by_id("touch-controls") {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(&settings, seed, width, height)));
        log::info!(
            "{} session initialized with seed: {}",
            settings.variant.as_str(),
            seed
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_touch_buttons(game.clone());
        setup_resize(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Cube Dodge running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let intent =
                    Intent::from_key(&event.key()).or_else(|| Intent::from_key_code(event.key_code()));
                if let Some(intent) = intent {
                    intent.apply(&mut game.borrow_mut().input, pressed);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, intent) in Intent::TOUCH_BUTTONS {
            let Some(button) = document.get_element_by_id(id) else {
                log::warn!("Touch button #{} not found", id);
                continue;
            };

            for (event_name, pressed) in [("touchstart", true), ("touchend", false)] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    intent.apply(&mut game.borrow_mut().input, pressed);
                });
                let _ = button
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = canvas_pixel_size(&window, &canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = game.borrow_mut().frame();

        // A collision cancels the loop for good; there is no restart
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frame cap for headless sessions (about five minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_FRAMES: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cube_dodge::{GameVariant, Settings};

    env_logger::init();
    log::info!("Cube Dodge (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let variant = std::env::args()
        .nth(1)
        .and_then(|arg| GameVariant::from_str(&arg))
        .unwrap_or(settings.variant);
    let tuning = load_tuning(variant);
    let seed = settings.seed_or(42);

    let outcome = headless::run(tuning, seed, HEADLESS_MAX_FRAMES);
    match outcome.collided_with {
        Some(enemy_id) => println!(
            "{}: collided with enemy {} after {} frames ({} enemies spawned, {} culled)",
            variant.as_str(),
            enemy_id,
            outcome.frames,
            outcome.spawned,
            outcome.culled
        ),
        None => println!(
            "{}: survived {} frames ({} enemies spawned, {} culled)",
            variant.as_str(),
            outcome.frames,
            outcome.spawned,
            outcome.culled
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Tuning from `CUBE_DODGE_TUNING` (a JSON file path), else the variant preset
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(variant: cube_dodge::GameVariant) -> cube_dodge::Tuning {
    use cube_dodge::Tuning;

    let Ok(path) = std::env::var("CUBE_DODGE_TUNING") else {
        return variant.tuning();
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Cannot read tuning file {}: {}", path, e);
            return variant.tuning();
        }
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Rejected tuning file {}: {}", path, e);
            variant.tuning()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use cube_dodge::Tuning;
    use cube_dodge::renderer::MeshScene;
    use cube_dodge::scene::SceneSync;
    use cube_dodge::sim::{BodyId, GameEvent, GameState, TickInput, tick};

    /// Summary of a finished headless session
    pub struct Outcome {
        pub frames: u64,
        pub spawned: usize,
        pub culled: usize,
        pub collided_with: Option<BodyId>,
    }

    /// Scripted player: sweep left and right, hopping every half second
    fn scripted_input(frame: u64) -> TickInput {
        let sweeping_right = (frame / 120) % 2 == 0;
        TickInput {
            move_right: sweeping_right,
            move_left: !sweeping_right,
            jump: frame % 30 == 0,
            ..Default::default()
        }
    }

    pub fn run(tuning: Tuning, seed: u64, max_frames: u64) -> Outcome {
        let mut state = GameState::new(tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scene = MeshScene::new();
        let mut sync = SceneSync::new();
        sync.init(&state, &mut scene);

        let mut outcome = Outcome {
            frames: 0,
            spawned: 0,
            culled: 0,
            collided_with: None,
        };

        while !state.is_over() && state.frames < max_frames {
            let input = scripted_input(state.frames);
            tick(&mut state, &input, &mut rng);

            for event in sync.apply(&mut state, &mut scene) {
                match event {
                    GameEvent::EnemySpawned { .. } => outcome.spawned += 1,
                    GameEvent::EnemyCulled { .. } => outcome.culled += 1,
                    GameEvent::Collision { enemy_id } => outcome.collided_with = Some(enemy_id),
                }
            }
        }

        outcome.frames = state.frames;
        log::info!(
            "Headless session ended at frame {} with {} nodes in the scene",
            state.frames,
            scene.len()
        );
        outcome
    }
}
