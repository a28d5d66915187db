//! Physics tuning parameters
//!
//! One immutable value threaded into every pipeline stage. Defaults reproduce
//! the game's feel; any field can be overridden from settings JSON.

use serde::{Deserialize, Serialize};

use crate::consts::{BACKBOARD_CENTER_Y, BACKBOARD_X, COURT_SCALE};

/// Launch-velocity coefficients used by the trajectory planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTuning {
    /// Horizontal speed at zero distance and zero power
    pub base_speed: f32,
    /// Extra horizontal speed per unit of horizontal distance
    pub speed_per_distance: f32,
    /// Extra horizontal speed at full power
    pub power_speed: f32,
    /// Vertical clearance added on top of the height difference
    pub arc_clearance: f32,
    /// Extra vertical speed per unit of horizontal distance
    pub arc_per_distance: f32,
    /// Extra vertical speed at full power
    pub power_arc: f32,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            speed_per_distance: 0.15,
            power_speed: 3.0,
            arc_clearance: 8.0,
            arc_per_distance: 0.3,
            power_arc: 2.0,
        }
    }
}

/// Every tunable constant of the shot simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Vertical acceleration (units/s², twice real g for game feel)
    pub gravity: f32,
    /// Height of the ball centre when resting on the floor
    pub ground_y: f32,
    /// Fraction of vertical speed kept after a floor bounce
    pub bounce_damping: f32,
    /// Horizontal speed multiplier per grounded tick
    pub ground_friction: f32,
    pub ball_radius: f32,

    /// Rim torus major radius
    pub rim_radius: f32,
    /// Rim torus tube radius
    pub rim_tube_radius: f32,
    /// Speed multiplier after a rim contact
    pub rim_bounce: f32,
    /// Gap left between ball and rim edge after a rim contact
    pub rim_push_margin: f32,

    /// Distance of the backboard plane from mid-court (mirrored per side)
    pub backboard_x: f32,
    pub backboard_center_y: f32,
    pub backboard_half_height: f32,
    /// Half extent of the board along Z
    pub backboard_half_width: f32,
    pub backboard_half_thickness: f32,
    /// X speed multiplier (sign flipped) after a backboard contact
    pub backboard_bounce: f32,
    /// Gap left between ball and board after a backboard contact
    pub backboard_push_margin: f32,

    /// Vertical window around rim height in which a clean pass is judged
    pub clean_shot_height_window: f32,
    /// Clearance between ball and rim inner edge required for a clean pass
    pub clean_shot_clearance: f32,

    /// Bounce speed below which a floor bounce is snapped to zero
    pub rest_velocity_threshold: f32,
    /// Vertical speed below which a grounded ball ends the shot
    pub rest_stop_threshold: f32,

    pub shot: ShotTuning,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: -9.8 * 2.0,
            ground_y: 0.5,
            bounce_damping: 0.6,
            ground_friction: 0.95,
            ball_radius: 0.5,

            rim_radius: 0.7,
            rim_tube_radius: 0.1,
            rim_bounce: 0.5,
            rim_push_margin: 0.05,

            backboard_x: BACKBOARD_X * COURT_SCALE,
            backboard_center_y: BACKBOARD_CENTER_Y,
            backboard_half_height: 1.5,
            backboard_half_width: 2.0,
            backboard_half_thickness: 0.05,
            backboard_bounce: 0.7,
            backboard_push_margin: 0.06,

            clean_shot_height_window: 0.3,
            clean_shot_clearance: 0.1,

            rest_velocity_threshold: 0.1,
            rest_stop_threshold: 0.01,

            shot: ShotTuning::default(),
        }
    }
}

impl PhysicsParams {
    /// Rim inner edge radius (major radius minus tube)
    #[inline]
    pub fn rim_inner_edge(&self) -> f32 {
        self.rim_radius - self.rim_tube_radius
    }

    /// Rim outer edge radius (major radius plus tube)
    #[inline]
    pub fn rim_outer_edge(&self) -> f32 {
        self.rim_radius + self.rim_tube_radius
    }

    /// Largest horizontal offset from the rim centre that still counts as a clean pass
    #[inline]
    pub fn clean_shot_radius(&self) -> f32 {
        self.rim_radius - self.ball_radius - self.clean_shot_clearance
    }
}
