//! Game state and core simulation types

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::ShotError;
use super::lifecycle::ShotLifecycle;
use super::params::PhysicsParams;
use crate::consts::*;
use crate::settings::Settings;

/// The basketball: position and velocity only
///
/// The radius is fixed for the whole simulation and lives in [`PhysicsParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Ball {
    /// A stationary ball at `position`
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}

/// Which end of the court a hoop is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoopSide {
    Left,
    Right,
}

impl HoopSide {
    /// -1 for the left end (negative X), +1 for the right end
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HoopSide::Left => -1.0,
            HoopSide::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HoopSide::Left => "left",
            HoopSide::Right => "right",
        }
    }
}

/// A hoop: rim centre plus the side it is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hoop {
    /// Rim centre (y is the rim height)
    pub position: Vec3,
    pub side: HoopSide,
}

impl Hoop {
    pub fn new(position: Vec3, side: HoopSide) -> Self {
        Self { position, side }
    }
}

/// Court layout: the two hoops and the floor bounds
///
/// Built once; the hoops never move afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    hoops: Vec<Hoop>,
    /// Half extent of the floor along X
    pub half_length: f32,
    /// Half extent of the floor along Z
    pub half_width: f32,
}

impl Court {
    /// Standard court at [`COURT_SCALE`], right hoop first
    pub fn standard() -> Self {
        let rim_x = RIM_X * COURT_SCALE;
        let hoops = [HoopSide::Right, HoopSide::Left]
            .into_iter()
            .map(|side| Hoop::new(Vec3::new(rim_x * side.sign(), RIM_HEIGHT, 0.0), side))
            .collect();

        Self {
            hoops,
            half_length: COURT_LENGTH * COURT_SCALE / 2.0,
            half_width: COURT_WIDTH * COURT_SCALE / 2.0,
        }
    }

    pub fn hoops(&self) -> &[Hoop] {
        &self.hoops
    }

    /// Clamp a ball position onto the floor area (X/Z only)
    pub fn clamp_to_floor(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_length, self.half_length),
            position.y,
            position.z.clamp(-self.half_width, self.half_width),
        )
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::standard()
    }
}

/// Where the current shot is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotState {
    /// Ball stationary, no shot taken since the last reset
    Idle,
    /// Physics running since the last shoot action
    InFlight { scored: bool },
    /// Ball came to rest; the shot was judged exactly once
    Resolved { made: bool },
}

/// Result of one shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub made: bool,
    pub points: u32,
}

impl ShotOutcome {
    pub fn made(points: u32) -> Self {
        Self { made: true, points }
    }

    pub fn missed() -> Self {
        Self {
            made: false,
            points: 0,
        }
    }
}

/// Running shot statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotStats {
    pub score: u32,
    pub attempts: u32,
    pub made: u32,
}

impl ShotStats {
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub fn record_score(&mut self, points: u32) {
        self.made += 1;
        self.score += points;
    }

    /// Made shots as a percentage of attempts (0 with no attempts)
    pub fn accuracy(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.made as f32 / self.attempts as f32 * 100.0
        }
    }
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotLaunched { power: f32, velocity: Vec3 },
    ShotRejected { reason: ShotError },
    Scored { points: u32 },
    Missed,
    PowerChanged { power: f32 },
    BallReset,
}

/// Everything the orchestrator owns between frames
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub court: Court,
    pub lifecycle: ShotLifecycle,
    pub stats: ShotStats,
    /// Current shot power (0-100)
    pub power: f32,
    pub settings: Settings,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self {
            ball: Ball::at_rest(settings.start_position),
            court: Court::standard(),
            lifecycle: ShotLifecycle::new(),
            stats: ShotStats::default(),
            power: settings.default_power,
            settings,
        }
    }

    #[inline]
    pub fn params(&self) -> &PhysicsParams {
        &self.settings.physics
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
