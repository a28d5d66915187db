//! wasm-bindgen surface for the browser page
//!
//! The page owns the Three.js scene and the animation frame loop; it feeds
//! key presses and frame deltas in and reads a JSON snapshot back out.

use wasm_bindgen::prelude::*;

use super::{FrameSnapshot, Keyboard};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Hoop Shot starting...");
}

/// Game instance driven by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    keys: Keyboard,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        WebGame {
            state: GameState::new(Settings::load()),
            keys: Keyboard::new(),
        }
    }

    /// `keydown` handler; returns whether the game uses the key
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.key_down(key)
    }

    /// `keyup` handler; returns whether the game uses the key
    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.key_up(key)
    }

    /// Window lost focus, so no `keyup` will arrive for held keys
    pub fn blur(&mut self) {
        self.keys.release_all();
    }

    /// Advance one frame (`dt` in seconds) and return the snapshot as JSON
    pub fn update(&mut self, dt: f32) -> Result<String, JsValue> {
        let input = self.keys.frame_input();
        let events = tick(&mut self.state, &input, dt);
        let snapshot = FrameSnapshot::capture(&self.state, events);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the settings (JSON, missing fields default) and restart
    pub fn configure(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        settings.save();
        self.state = GameState::new(settings);
        self.keys.release_all();
        Ok(())
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
