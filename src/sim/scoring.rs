//! Clean-pass detection

use glam::Vec3;

use super::params::PhysicsParams;
use super::state::Hoop;
use crate::horizontal_distance;

/// Whether the ball is dropping through a hoop opening this tick
///
/// Only a ball that is not rising can score. It must be within the height
/// window around the rim and well inside the rim footprint. Collisions in the
/// same tick are ignored; de-duplication is the lifecycle's job.
pub fn check_clean_shot(
    position: Vec3,
    velocity: Vec3,
    hoops: &[Hoop],
    params: &PhysicsParams,
) -> bool {
    if velocity.y > 0.0 {
        return false;
    }

    let max_offset = params.clean_shot_radius();

    hoops.iter().any(|hoop| {
        (position.y - hoop.position.y).abs() < params.clean_shot_height_window
            && horizontal_distance(position, hoop.position) < max_offset
    })
}
