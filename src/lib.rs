//! Hoop Shot - basketball shot physics for a browser mini-game
//!
//! Core modules:
//! - `sim`: Deterministic shot simulation (trajectory, collisions, scoring, lifecycle)
//! - `settings`: Tunable parameters, loadable from JSON / LocalStorage
//! - `platform`: Browser bindings for the page that renders the court

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec3;

/// Court and game configuration constants
pub mod consts {
    /// Scale applied to every court dimension
    pub const COURT_SCALE: f32 = 1.5;

    /// Floor extents (before scaling): length along X, width along Z
    pub const COURT_LENGTH: f32 = 30.0;
    pub const COURT_WIDTH: f32 = 15.0;

    /// Rim centre distance from mid-court (before scaling)
    pub const RIM_X: f32 = 13.8;
    /// Rim height above the floor
    pub const RIM_HEIGHT: f32 = 4.0;

    /// Backboard plane distance from mid-court (before scaling)
    pub const BACKBOARD_X: f32 = 14.5;
    /// Backboard centre height
    pub const BACKBOARD_CENTER_Y: f32 = 4.7;

    /// Ball rest position at game start / reset
    pub const BALL_START: [f32; 3] = [0.0, 2.0, 0.0];

    /// Points awarded for a made basket
    pub const POINTS_PER_BASKET: u32 = 2;

    /// Power slider
    pub const DEFAULT_POWER: f32 = 50.0;
    pub const POWER_STEP: f32 = 5.0;
    pub const MAX_POWER: f32 = 100.0;

    /// Ball nudge per move input
    pub const MOVE_SPEED: f32 = 0.2;
}

/// Length of the XZ projection of a vector
#[inline]
pub fn horizontal_length(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Horizontal (XZ-plane) distance between two points
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    horizontal_length(a - b)
}
