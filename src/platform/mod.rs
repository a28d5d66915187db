//! Platform layer
//!
//! Tracks the keyboard between frames and, on wasm, exposes the game to the
//! page that renders the court.

use std::collections::HashSet;

use serde::Serialize;

use crate::sim::{Ball, GameEvent, GameState, ShotState, ShotStats, TickInput};

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Game name for a `KeyboardEvent.key` value; letters ignore shift/caps lock
fn game_key(key: &str) -> Option<&'static str> {
    match key {
        "ArrowLeft" => Some("ArrowLeft"),
        "ArrowRight" => Some("ArrowRight"),
        "ArrowUp" => Some("ArrowUp"),
        "ArrowDown" => Some("ArrowDown"),
        "w" | "W" => Some("w"),
        "s" | "S" => Some("s"),
        " " => Some(" "),
        "r" | "R" => Some("r"),
        _ => None,
    }
}

/// Keyboard state between frames
///
/// Held arrow keys move the ball on every frame. Power, shoot and reset fire
/// once per press; key repeat while held is ignored.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<&'static str>,
    pending: TickInput,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for keys the game does not use
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = game_key(key) else {
            return false;
        };
        if !self.held.insert(key) {
            return true;
        }

        match key {
            "w" => self.pending.power_up = true,
            "s" => self.pending.power_down = true,
            " " => self.pending.shoot = true,
            "r" => self.pending.reset = true,
            _ => {}
        }
        true
    }

    /// Returns false for keys the game does not use
    pub fn key_up(&mut self, key: &str) -> bool {
        match game_key(key) {
            Some(key) => {
                self.held.remove(key);
                true
            }
            None => false,
        }
    }

    /// Forget held keys and queued presses (focus lost, game restarted)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pending = TickInput::default();
    }

    pub fn is_held(&self, key: &str) -> bool {
        game_key(key).is_some_and(|key| self.held.contains(key))
    }

    /// Input for the next tick: presses since the last frame plus held arrows
    pub fn frame_input(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);

        let (mut dx, mut dz) = (0.0, 0.0);
        for key in &self.held {
            match *key {
                "ArrowLeft" => dx -= 1.0,
                "ArrowRight" => dx += 1.0,
                "ArrowUp" => dz -= 1.0,
                "ArrowDown" => dz += 1.0,
                _ => {}
            }
        }
        if dx != 0.0 || dz != 0.0 {
            input.movement = Some((dx, dz));
        }
        input
    }
}

/// What the renderer and HUD need after a frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub ball: Ball,
    pub power: f32,
    pub shot: ShotState,
    pub stats: ShotStats,
    pub accuracy: f32,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, events: Vec<GameEvent>) -> Self {
        Self {
            ball: state.ball,
            power: state.power,
            shot: state.lifecycle.state(),
            stats: state.stats,
            accuracy: state.stats.accuracy(),
            events,
        }
    }
}
