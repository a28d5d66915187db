//! Collision detection and response against the backboard and rim
//!
//! Both checks look at the already-integrated position only (no swept test),
//! and hand back the corrected ball state instead of mutating it. The
//! backboard is an infinitely thin vertical plane with a finite height/width
//! band; the rim is a torus lying flat around the hoop centre.

use glam::Vec3;

use super::params::PhysicsParams;
use super::state::Hoop;
use crate::horizontal_length;

/// Surface the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Backboard,
    Rim,
}

/// A resolved contact: where the ball ends up and how it moves afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub surface: Surface,
    /// Corrected ball centre, pushed clear of the surface
    pub position: Vec3,
    /// Velocity after reflection and damping
    pub velocity: Vec3,
    /// Surface normal pointing toward the ball
    pub normal: Vec3,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check the ball against every backboard
///
/// Boards sit at `±backboard_x` depending on the hoop side. A hit flips and
/// damps the X velocity and places the ball just in front of the board on
/// the court side. First board hit wins.
pub fn check_backboard_collision(
    position: Vec3,
    velocity: Vec3,
    hoops: &[Hoop],
    params: &PhysicsParams,
) -> Option<Contact> {
    let radius = params.ball_radius;

    for hoop in hoops {
        let sign = hoop.side.sign();
        let board_x = sign * params.backboard_x;

        if (position.x - board_x).abs() >= radius + params.backboard_half_thickness {
            continue;
        }

        let bottom = params.backboard_center_y - params.backboard_half_height;
        let top = params.backboard_center_y + params.backboard_half_height;
        let within_height = position.y > bottom && position.y < top;
        let within_width = (position.z - hoop.position.z).abs() < params.backboard_half_width;

        if !(within_height && within_width) {
            continue;
        }

        log::debug!("Backboard collision ({} hoop)", hoop.side.as_str());

        // Boards face mid-court
        let normal = Vec3::new(-sign, 0.0, 0.0);
        let pushed_x = board_x - sign * (radius + params.backboard_push_margin);

        return Some(Contact {
            surface: Surface::Backboard,
            position: Vec3::new(pushed_x, position.y, position.z),
            velocity: Vec3::new(
                velocity.x * -params.backboard_bounce,
                velocity.y,
                velocity.z,
            ),
            normal,
        });
    }

    None
}

/// Check the ball against every rim
///
/// Contact when the ball is within `ball_radius + tube` of rim height and
/// its horizontal offset from the rim centre overlaps the torus band. The
/// velocity is reflected about the horizontal radial normal, damped, given
/// a small upward kick, and the ball is moved radially off the nearer edge.
/// Only the first rim touched is resolved.
pub fn check_rim_collision(
    position: Vec3,
    velocity: Vec3,
    hoops: &[Hoop],
    params: &PhysicsParams,
) -> Option<Contact> {
    let radius = params.ball_radius;
    let inner_edge = params.rim_inner_edge();
    let outer_edge = params.rim_outer_edge();

    for hoop in hoops {
        let rim_center = hoop.position;
        let offset = Vec3::new(position.x - rim_center.x, 0.0, position.z - rim_center.z);
        let horizontal_dist = horizontal_length(offset);
        let height_diff = (position.y - rim_center.y).abs();

        if height_diff >= radius + params.rim_tube_radius {
            continue;
        }

        if horizontal_dist <= inner_edge - radius || horizontal_dist >= outer_edge + radius {
            continue;
        }
        // Dead centre has no radial direction to push along
        if horizontal_dist <= f32::EPSILON {
            continue;
        }

        log::debug!("Rim collision ({} hoop)", hoop.side.as_str());

        let normal = offset / horizontal_dist;
        let mut bounced = reflect_velocity(velocity, normal) * params.rim_bounce;
        bounced.y = bounced.y.abs() * 0.5;

        let target_dist = if horizontal_dist < params.rim_radius {
            inner_edge - radius - params.rim_push_margin
        } else {
            outer_edge + radius + params.rim_push_margin
        };

        return Some(Contact {
            surface: Surface::Rim,
            position: Vec3::new(
                rim_center.x + normal.x * target_dist,
                position.y,
                rim_center.z + normal.z * target_dist,
            ),
            velocity: bounced,
            normal,
        });
    }

    None
}
