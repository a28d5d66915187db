//! Shot lifecycle: Idle → InFlight → Resolved
//!
//! The scored flag lives inside the `InFlight` variant, so a flight can emit
//! at most one made outcome and a shot is judged exactly once.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::ShotError;
use super::params::PhysicsParams;
use super::state::{Ball, Hoop, ShotOutcome, ShotState};
use super::tick::step;
use super::trajectory::compute_shot_velocity;
use crate::consts::POINTS_PER_BASKET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotLifecycle {
    state: ShotState,
}

impl Default for ShotLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotLifecycle {
    pub fn new() -> Self {
        Self {
            state: ShotState::Idle,
        }
    }

    pub fn state(&self) -> ShotState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, ShotState::InFlight { .. })
    }

    /// Plan a shot at the nearest hoop and launch it
    ///
    /// On error neither the ball nor the lifecycle changes.
    pub fn shoot(
        &mut self,
        ball: &mut Ball,
        power: f32,
        hoops: &[Hoop],
        params: &PhysicsParams,
    ) -> Result<Vec3, ShotError> {
        if self.is_in_flight() {
            return Err(ShotError::ShotInProgress);
        }
        let velocity = compute_shot_velocity(power, ball.position, hoops, params)?;
        self.launch(ball, velocity)?;
        Ok(velocity)
    }

    /// Start a flight with a caller-chosen velocity
    pub fn launch(&mut self, ball: &mut Ball, velocity: Vec3) -> Result<(), ShotError> {
        if self.is_in_flight() {
            return Err(ShotError::ShotInProgress);
        }
        ball.velocity = velocity;
        self.state = ShotState::InFlight { scored: false };
        Ok(())
    }

    /// Run one physics tick of the current flight
    ///
    /// Returns the made outcome on the first clean pass, or the missed
    /// outcome when the ball settles without having scored. Does nothing
    /// unless a shot is in flight.
    pub fn advance(
        &mut self,
        ball: &mut Ball,
        dt: f32,
        hoops: &[Hoop],
        params: &PhysicsParams,
    ) -> Option<ShotOutcome> {
        let ShotState::InFlight { scored } = self.state else {
            return None;
        };

        let result = step(*ball, dt, hoops, params);
        *ball = result.ball;

        let mut outcome = None;
        let mut scored = scored;
        if result.clean_shot && !scored {
            scored = true;
            outcome = Some(ShotOutcome::made(POINTS_PER_BASKET));
        }

        // Horizontal speed is not part of the rest check
        self.state = if result.at_rest {
            if !scored {
                outcome = Some(ShotOutcome::missed());
            }
            ShotState::Resolved { made: scored }
        } else {
            ShotState::InFlight { scored }
        };

        outcome
    }

    /// Put the ball back at `start`, motionless, and go Idle
    pub fn reset(&mut self, ball: &mut Ball, start: Vec3) {
        *ball = Ball::at_rest(start);
        self.state = ShotState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Court, HoopSide};

    const DT: f32 = 1.0 / 120.0;

    fn run_to_rest(
        lifecycle: &mut ShotLifecycle,
        ball: &mut Ball,
        hoops: &[Hoop],
        params: &PhysicsParams,
        max_ticks: usize,
    ) -> Vec<ShotOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..max_ticks {
            if !lifecycle.is_in_flight() {
                break;
            }
            outcomes.extend(lifecycle.advance(ball, DT, hoops, params));
        }
        outcomes
    }

    #[test]
    fn test_drop_through_hoop_scores_once() {
        let params = PhysicsParams::default();
        let hoops = [Hoop::new(Vec3::new(20.7, 4.0, 0.0), HoopSide::Right)];
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(20.7, 4.25, 0.0));

        lifecycle.launch(&mut ball, Vec3::new(0.0, -0.1, 0.0)).unwrap();
        let outcomes = run_to_rest(&mut lifecycle, &mut ball, &hoops, &params, 5_000);

        assert_eq!(outcomes, vec![ShotOutcome::made(2)]);
        assert_eq!(lifecycle.state(), ShotState::Resolved { made: true });
        assert_eq!(ball.position.y, params.ground_y);
    }

    #[test]
    fn test_drop_beside_hoop_misses_once() {
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, 5.0, 0.0));

        lifecycle.launch(&mut ball, Vec3::ZERO).unwrap();
        let outcomes = run_to_rest(&mut lifecycle, &mut ball, court.hoops(), &params, 5_000);

        assert_eq!(outcomes, vec![ShotOutcome::missed()]);
        assert_eq!(lifecycle.state(), ShotState::Resolved { made: false });
    }

    #[test]
    fn test_shoot_rejected_while_in_flight() {
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, 2.0, 0.0));

        lifecycle.shoot(&mut ball, 50.0, court.hoops(), &params).unwrap();
        let before = ball;
        assert_eq!(
            lifecycle.shoot(&mut ball, 80.0, court.hoops(), &params),
            Err(ShotError::ShotInProgress)
        );
        assert_eq!(ball, before);
        assert_eq!(lifecycle.state(), ShotState::InFlight { scored: false });
    }

    #[test]
    fn test_failed_plan_leaves_state_alone() {
        let params = PhysicsParams::default();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, 2.0, 0.0));

        assert_eq!(
            lifecycle.shoot(&mut ball, 50.0, &[], &params),
            Err(ShotError::InvalidConfiguration)
        );
        assert_eq!(lifecycle.state(), ShotState::Idle);
        assert_eq!(ball, Ball::at_rest(Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_reset_from_flight() {
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let start = Vec3::new(0.0, 2.0, 0.0);
        let mut ball = Ball::at_rest(start);

        lifecycle.shoot(&mut ball, 50.0, court.hoops(), &params).unwrap();
        lifecycle.advance(&mut ball, DT, court.hoops(), &params);
        lifecycle.reset(&mut ball, start);

        assert_eq!(lifecycle.state(), ShotState::Idle);
        assert_eq!(ball, Ball::at_rest(start));
        assert_eq!(lifecycle.advance(&mut ball, DT, court.hoops(), &params), None);
        assert_eq!(ball, Ball::at_rest(start));
    }

    #[test]
    fn test_shoot_again_after_resolution() {
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, 0.5, 0.0));

        lifecycle.launch(&mut ball, Vec3::ZERO).unwrap();
        run_to_rest(&mut lifecycle, &mut ball, court.hoops(), &params, 100);
        assert!(matches!(lifecycle.state(), ShotState::Resolved { .. }));

        assert!(lifecycle.shoot(&mut ball, 50.0, court.hoops(), &params).is_ok());
        assert_eq!(lifecycle.state(), ShotState::InFlight { scored: false });
    }

    #[test]
    fn test_sliding_ball_still_resolves() {
        // Rolling along the floor: the bounce (0.098) snaps to zero on the
        // first tick, so the shot ends while x speed is still 2.85
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, params.ground_y, 0.0));

        lifecycle.launch(&mut ball, Vec3::new(3.0, 0.0, 0.0)).unwrap();
        let outcome = lifecycle.advance(&mut ball, DT, court.hoops(), &params);

        assert_eq!(outcome, Some(ShotOutcome::missed()));
        assert_eq!(lifecycle.state(), ShotState::Resolved { made: false });
        assert_eq!(ball.velocity.y, 0.0);
        assert!((ball.velocity.x - 2.85).abs() < 1e-5);
    }

    #[test]
    fn test_large_dt_bounces_forever() {
        // Steady bounce: v = 0.6 * (1.96 - v) settles at 0.735, never under 0.1
        let params = PhysicsParams::default();
        let court = Court::standard();
        let mut lifecycle = ShotLifecycle::new();
        let mut ball = Ball::at_rest(Vec3::new(0.0, 0.5, 0.0));

        lifecycle.launch(&mut ball, Vec3::ZERO).unwrap();
        for _ in 0..1_000 {
            assert_eq!(lifecycle.advance(&mut ball, 0.1, court.hoops(), &params), None);
        }
        assert!(lifecycle.is_in_flight());
        assert_eq!(ball.position.y, params.ground_y);
    }
}
