//! Per-frame simulation tick
//!
//! `step` is the physics pipeline for one tick, in this fixed order:
//! gravity → position → backboard → rim → clean-shot check → floor.
//! `tick` is the game loop on top of it: inputs, the shot lifecycle and
//! score keeping.

use glam::Vec3;

use super::collision::{check_backboard_collision, check_rim_collision};
use super::motion::{advance_position, apply_gravity, resolve_ground};
use super::params::PhysicsParams;
use super::scoring::check_clean_shot;
use super::state::{Ball, GameEvent, GameState, Hoop};
use crate::consts::MAX_POWER;

/// Output of one physics tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub ball: Ball,
    /// Ball is passing cleanly through a hoop this tick
    pub clean_shot: bool,
    /// Ball is on the floor with (almost) no vertical speed
    pub at_rest: bool,
}

/// Advance the ball by one tick
///
/// Pure: the result depends only on the arguments. `dt` is used as given,
/// so a long frame moves the ball far in one go and can skip collisions.
pub fn step(ball: Ball, dt: f32, hoops: &[Hoop], params: &PhysicsParams) -> StepResult {
    let mut velocity = apply_gravity(ball.velocity, dt, params);
    // Collisions see the position a full tick ahead
    let mut position = advance_position(ball.position, velocity, dt);

    if let Some(contact) = check_backboard_collision(position, velocity, hoops, params) {
        position = contact.position;
        velocity = contact.velocity;
    }

    if let Some(contact) = check_rim_collision(position, velocity, hoops, params) {
        position = contact.position;
        velocity = contact.velocity;
    }

    let clean_shot = check_clean_shot(position, velocity, hoops, params);

    let (position, velocity) = resolve_ground(position, velocity, params);

    let at_rest = velocity.y.abs() < params.rest_stop_threshold && position.y <= params.ground_y;

    StepResult {
        ball: Ball { position, velocity },
        clean_shot,
        at_rest,
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Ball nudge on the floor (x, z), each in -1..=1
    pub movement: Option<(f32, f32)>,
    pub power_up: bool,
    pub power_down: bool,
    pub shoot: bool,
    pub reset: bool,
}

/// Advance the game by one frame
///
/// Returns the events produced this frame, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        let start = state.settings.start_position;
        state.lifecycle.reset(&mut state.ball, start);
        state.power = state.settings.default_power;
        log::info!("Ball reset");
        events.push(GameEvent::BallReset);
        events.push(GameEvent::PowerChanged { power: state.power });
    }

    if input.power_up || input.power_down {
        let mut delta = 0.0;
        if input.power_up {
            delta += state.settings.power_step;
        }
        if input.power_down {
            delta -= state.settings.power_step;
        }
        let power = (state.power + delta).clamp(0.0, MAX_POWER);
        if power != state.power {
            state.power = power;
            events.push(GameEvent::PowerChanged { power });
        }
    }

    if let Some((dx, dz)) = input.movement {
        if !state.lifecycle.is_in_flight() {
            let speed = state.settings.move_speed;
            let moved = state.ball.position + Vec3::new(dx * speed, 0.0, dz * speed);
            state.ball.position = state.court.clamp_to_floor(moved);
        }
    }

    let mut launched = false;
    if input.shoot {
        let params = state.settings.physics;
        match state
            .lifecycle
            .shoot(&mut state.ball, state.power, state.court.hoops(), &params)
        {
            Ok(velocity) => {
                launched = true;
                state.stats.record_attempt();
                log::info!(
                    "Shot #{} with power {}: velocity {:?}",
                    state.stats.attempts,
                    state.power,
                    velocity
                );
                events.push(GameEvent::ShotLaunched {
                    power: state.power,
                    velocity,
                });
            }
            Err(reason) => {
                log::warn!("Shot rejected: {}", reason);
                events.push(GameEvent::ShotRejected { reason });
            }
        }
    }

    // A fresh shot leaves the launch point on the next frame
    let params = state.settings.physics;
    let outcome = if launched {
        None
    } else {
        state
            .lifecycle
            .advance(&mut state.ball, dt, state.court.hoops(), &params)
    };
    if let Some(outcome) = outcome {
        if outcome.made {
            state.stats.record_score(outcome.points);
            log::info!("Score! Total: {}", state.stats.score);
            events.push(GameEvent::Scored {
                points: outcome.points,
            });
        } else {
            log::info!("Missed ({:.1}% accuracy)", state.stats.accuracy());
            events.push(GameEvent::Missed);
        }
    }

    events
}
