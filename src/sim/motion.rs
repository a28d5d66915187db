//! Integration and floor contact
//!
//! Semi-implicit Euler: gravity updates the velocity first, then the position
//! moves with that velocity. Nothing here clamps `dt`.

use glam::Vec3;

use super::params::PhysicsParams;

/// Velocity after one tick of gravity
#[inline]
pub fn apply_gravity(velocity: Vec3, dt: f32, params: &PhysicsParams) -> Vec3 {
    Vec3::new(velocity.x, velocity.y + params.gravity * dt, velocity.z)
}

/// Position after one tick at constant `velocity`
///
/// No swept test follows: a fast ball can step over the rim in a single tick.
#[inline]
pub fn advance_position(position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
    position + velocity * dt
}

/// Keep the ball on or above the floor, bouncing and rolling it when grounded
///
/// Returns the corrected `(position, velocity)`.
pub fn resolve_ground(position: Vec3, velocity: Vec3, params: &PhysicsParams) -> (Vec3, Vec3) {
    if position.y > params.ground_y {
        return (position, velocity);
    }

    let position = Vec3::new(position.x, params.ground_y, position.z);
    let mut velocity = velocity;

    if velocity.y < 0.0 {
        velocity.y *= -params.bounce_damping;

        // Kill tiny bounces
        if velocity.y.abs() < params.rest_velocity_threshold {
            velocity.y = 0.0;
        }
    }

    velocity.x *= params.ground_friction;
    velocity.z *= params.ground_friction;

    (position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_gravity_only_touches_y() {
        let params = PhysicsParams::default();
        let v = apply_gravity(Vec3::new(1.0, 2.0, 3.0), 0.5, &params);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.z, 3.0);
        assert!((v.y - (2.0 - 9.8)).abs() < EPS);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let params = PhysicsParams::default();
        let v = Vec3::new(4.0, -1.0, 2.0);
        assert_eq!(apply_gravity(v, 0.0, &params), v);
        assert_eq!(advance_position(Vec3::ONE, v, 0.0), Vec3::ONE);
    }

    #[test]
    fn test_ground_bounce() {
        let params = PhysicsParams::default();
        let (pos, vel) =
            resolve_ground(Vec3::new(0.0, 0.3, 0.0), Vec3::new(2.0, -5.0, 0.0), &params);

        assert_eq!(pos.y, 0.5);
        assert!((vel.x - 1.9).abs() < EPS);
        assert!((vel.y - 3.0).abs() < EPS);
        assert_eq!(vel.z, 0.0);
    }

    #[test]
    fn test_small_bounce_snaps_to_rest() {
        let params = PhysicsParams::default();
        // 0.15 * 0.6 = 0.09, under the 0.1 rest threshold
        let (_, vel) = resolve_ground(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -0.15, 0.0), &params);
        assert_eq!(vel.y, 0.0);

        let (_, vel) = resolve_ground(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -0.05, 0.0), &params);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_rising_ball_on_floor_keeps_vertical_speed() {
        let params = PhysicsParams::default();
        let (pos, vel) =
            resolve_ground(Vec3::new(1.0, 0.4, 1.0), Vec3::new(1.0, 2.0, -1.0), &params);
        assert_eq!(pos, Vec3::new(1.0, 0.5, 1.0));
        assert_eq!(vel.y, 2.0);
        assert!((vel.x - 0.95).abs() < EPS);
        assert!((vel.z + 0.95).abs() < EPS);
    }

    #[test]
    fn test_airborne_ball_untouched() {
        let params = PhysicsParams::default();
        let pos = Vec3::new(0.0, 3.0, 0.0);
        let vel = Vec3::new(2.0, -5.0, 1.0);
        assert_eq!(resolve_ground(pos, vel, &params), (pos, vel));
    }

    proptest! {
        #[test]
        fn prop_ground_invariant(
            y in -50.0f32..50.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
            vz in -30.0f32..30.0,
        ) {
            let params = PhysicsParams::default();
            let (pos, _) = resolve_ground(Vec3::new(0.0, y, 0.0), Vec3::new(vx, vy, vz), &params);
            prop_assert!(pos.y >= params.ground_y);
        }
    }
}
