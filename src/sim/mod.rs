//! Deterministic shot simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every stage takes values and returns values
//! - One immutable `PhysicsParams` threaded through every stage
//! - Stable iteration order (hoops in court order, first match wins)
//! - No rendering or platform dependencies

pub mod collision;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod params;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Contact, Surface, check_backboard_collision, check_rim_collision, reflect_velocity};
pub use error::ShotError;
pub use lifecycle::ShotLifecycle;
pub use motion::{advance_position, apply_gravity, resolve_ground};
pub use params::{PhysicsParams, ShotTuning};
pub use scoring::check_clean_shot;
pub use state::{
    Ball, Court, GameEvent, GameState, Hoop, HoopSide, ShotOutcome, ShotState, ShotStats,
};
pub use tick::{StepResult, TickInput, step, tick};
pub use trajectory::{compute_shot_velocity, nearest_hoop};
