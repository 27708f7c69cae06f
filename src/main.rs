//! Maze Muncher entry point
//!
//! Web: exports `WebGame` for a JavaScript host that owns the canvas, the
//! animation frame loop and the audio. Native: runs a headless autopilot
//! session and logs every game event.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use maze_muncher::input::{direction_for_button, direction_for_key, direction_for_swipe};
    use maze_muncher::sim::{GameEvent, GameState, tick};
    use maze_muncher::{Tuning, sim::Template};

    /// Game instance driven by the page's frame callback
    #[wasm_bindgen]
    pub struct WebGame {
        state: GameState,
        on_game_over: Option<js_sys::Function>,
        on_level_complete: Option<js_sys::Function>,
        on_start: Option<js_sys::Function>,
        on_reset: Option<js_sys::Function>,
    }

    fn to_js(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    #[wasm_bindgen]
    impl WebGame {
        /// New game on the built-in maze
        #[wasm_bindgen(constructor)]
        pub fn new(seed: f64) -> Result<WebGame, JsValue> {
            let state = GameState::new(seed as u64).map_err(to_js)?;
            Ok(Self::wrap(state))
        }

        /// New game from a template string and optional tuning JSON
        pub fn with_template(template: &str, tuning_json: Option<String>, seed: f64) -> Result<WebGame, JsValue> {
            let template = Template::parse(template).map_err(to_js)?;
            let tuning = match tuning_json {
                Some(json) => Tuning::from_json(&json).map_err(to_js)?,
                None => Tuning::default(),
            };
            let state = GameState::with_template(template, tuning, seed as u64).map_err(to_js)?;
            Ok(Self::wrap(state))
        }

        /// Advance one frame and fire lifecycle callbacks
        pub fn tick(&mut self) {
            tick(&mut self.state);
            self.dispatch_events();
        }

        pub fn key_down(&mut self, event: &KeyboardEvent) {
            if let Some(dir) = direction_for_key(&event.key()) {
                event.prevent_default();
                self.state.set_desired_direction(dir);
            }
        }

        pub fn swipe(&mut self, dx: f32, dy: f32) {
            if let Some(dir) = direction_for_swipe(dx, dy) {
                self.state.set_desired_direction(dir);
            }
        }

        pub fn press(&mut self, button: &str) {
            if let Some(dir) = direction_for_button(button) {
                self.state.set_desired_direction(dir);
            }
        }

        pub fn restart(&mut self) {
            self.state.restart();
            self.dispatch_events();
        }

        /// Render sink: the whole visible state as JSON
        pub fn snapshot_json(&self) -> Result<String, JsValue> {
            self.state.snapshot().to_json().map_err(to_js)
        }

        pub fn on_game_over(&mut self, callback: js_sys::Function) {
            self.on_game_over = Some(callback);
        }

        pub fn on_level_complete(&mut self, callback: js_sys::Function) {
            self.on_level_complete = Some(callback);
        }

        pub fn on_start(&mut self, callback: js_sys::Function) {
            self.on_start = Some(callback);
        }

        pub fn on_reset(&mut self, callback: js_sys::Function) {
            self.on_reset = Some(callback);
        }
    }

    impl WebGame {
        fn wrap(state: GameState) -> Self {
            Self {
                state,
                on_game_over: None,
                on_level_complete: None,
                on_start: None,
                on_reset: None,
            }
        }

        /// Forward queued events to whichever callbacks are registered
        fn dispatch_events(&mut self) {
            for event in self.state.drain_events() {
                let (callback, arg) = match event {
                    GameEvent::GameOver { final_score, .. } => {
                        (&self.on_game_over, JsValue::from_f64(final_score as f64))
                    }
                    GameEvent::LevelComplete { level } => (&self.on_level_complete, JsValue::from(level)),
                    GameEvent::Started { level } => (&self.on_start, JsValue::from(level)),
                    GameEvent::Reset => (&self.on_reset, JsValue::UNDEFINED),
                    _ => continue,
                };
                if let Some(callback) = callback {
                    if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                        log::warn!("Lifecycle callback failed: {:?}", e);
                    }
                }
            }
        }
    }

    pub fn init() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Maze Muncher (web) ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::init();
}

/// Headless Maze Muncher run with a random autopilot
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "maze-muncher")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the adversary RNG and the autopilot
    #[arg(default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate (60 per second)
    #[arg(default_value_t = 60 * 60)]
    ticks: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use maze_muncher::sim::{Direction, GameState, tick};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    let Args { seed, ticks } = Args::parse();

    env_logger::init();

    log::info!("Maze Muncher (headless) starting, seed {} for {} ticks", seed, ticks);

    let mut state = match GameState::new(seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build game: {}", e);
            std::process::exit(1);
        }
    };

    // Autopilot: a fresh random heading every half second
    let mut pilot = Pcg32::seed_from_u64(seed.wrapping_add(1));
    for frame in 0..ticks {
        if frame % 30 == 0 {
            let choice = pilot.random_range(0..Direction::CARDINAL.len());
            state.set_desired_direction(Direction::CARDINAL[choice]);
        }
        tick(&mut state);
        for event in state.drain_events() {
            log::info!("[tick {}] {:?}", state.time_ticks, event);
        }
    }

    let session = state.session;
    println!(
        "Finished {} ticks: level {}, score {}, lives {}, {} pellets left",
        ticks,
        session.level,
        session.score,
        session.lives,
        state.level.pellets_remaining()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_defaults_and_positionals() {
        let args = Args::try_parse_from(["maze-muncher"]).expect("defaults");
        assert_eq!((args.seed, args.ticks), (42, 3600));

        let args = Args::try_parse_from(["maze-muncher", "7", "600"]).expect("positionals");
        assert_eq!((args.seed, args.ticks), (7, 600));
    }

    #[test]
    fn test_args_reject_bad_numbers() {
        assert!(Args::try_parse_from(["maze-muncher", "notaseed", "600"]).is_err());
        assert!(Args::try_parse_from(["maze-muncher", "7", "-5"]).is_err());
        assert!(Args::try_parse_from(["maze-muncher", "7", "600", "extra"]).is_err());
    }
}
