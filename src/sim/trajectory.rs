//! Launch velocity planning
//!
//! Picks the nearest hoop and turns a 0-100 power setting into a launch
//! velocity: horizontal speed grows with distance and power, vertical speed
//! is the height difference plus a generous arc.

use glam::Vec3;

use super::error::ShotError;
use super::params::PhysicsParams;
use super::state::Hoop;
use crate::consts::MAX_POWER;
use crate::horizontal_length;

/// Nearest hoop to `from` by straight-line distance
///
/// Ties keep the hoop listed first.
pub fn nearest_hoop(from: Vec3, hoops: &[Hoop]) -> Option<&Hoop> {
    let (first, rest) = hoops.split_first()?;
    let mut nearest = first;
    let mut min_distance = from.distance(first.position);

    for hoop in rest {
        let distance = from.distance(hoop.position);
        if distance < min_distance {
            min_distance = distance;
            nearest = hoop;
        }
    }

    Some(nearest)
}

/// Launch velocity for a shot at the nearest hoop
///
/// `power` is clamped to `0..=100`. Fails with
/// [`ShotError::InvalidConfiguration`] when `hoops` is empty and with
/// [`ShotError::NumericInstability`] when the ball is directly below the rim
/// centre (no horizontal direction to aim along).
pub fn compute_shot_velocity(
    power: f32,
    ball_position: Vec3,
    hoops: &[Hoop],
    params: &PhysicsParams,
) -> Result<Vec3, ShotError> {
    let hoop = nearest_hoop(ball_position, hoops).ok_or(ShotError::InvalidConfiguration)?;
    let tuning = &params.shot;

    let to_hoop = hoop.position - ball_position;
    let horizontal_distance = horizontal_length(to_hoop);
    let height_difference = to_hoop.y;

    let direction = Vec3::new(to_hoop.x, 0.0, to_hoop.z)
        .try_normalize()
        .ok_or(ShotError::NumericInstability)?;

    let power_factor = power.clamp(0.0, MAX_POWER) / MAX_POWER;

    let base_speed = tuning.base_speed + horizontal_distance * tuning.speed_per_distance;
    let final_speed = base_speed + power_factor * tuning.power_speed;

    let min_arc_height = height_difference + tuning.arc_clearance;
    let arc_height = min_arc_height
        + horizontal_distance * tuning.arc_per_distance
        + power_factor * tuning.power_arc;

    log::debug!(
        "Shot at {} hoop: distance={:.3} height={:.3} speed={:.3} arc={:.3}",
        hoop.side.as_str(),
        horizontal_distance,
        height_difference,
        final_speed,
        arc_height
    );

    Ok(Vec3::new(
        direction.x * final_speed,
        arc_height,
        direction.z * final_speed,
    ))
}
