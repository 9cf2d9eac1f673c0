//! Goal-plane collision
//!
//! The scoring plane is discretized: a ball arrives on the tick its
//! floored depth equals the plane marker, so arrival happens inside a
//! one-unit band behind the posts. Contact is a rectangular window
//! around the defending entity, with the vertical side floored the
//! same way. Floor, never round; the marker band must start exactly at
//! the marker.

use glam::{Vec2, Vec3};

use super::state::{EntityId, GameSession};
use crate::consts::FLOOR_Y;

/// What the ball's current position means for the shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Nothing to report yet (also returned when no shot is underway)
    InFlight,
    /// Reached the plane inside the defender's window: a practice hit
    /// or a keeper block
    Contact,
    /// Reached the plane clear of the defender
    Clear,
    /// Came down short; the flight ends without reaching the plane
    Expired,
}

/// Classify the ball against the active mode's defender.
pub fn evaluate(session: &GameSession) -> ShotOutcome {
    if !session.shot.in_flight {
        return ShotOutcome::InFlight;
    }
    let ball = session.position(EntityId::Ball);

    if plane_reached(ball.z, session.tuning.plane_marker) {
        let defender = session.defender();
        let contact = match defender {
            EntityId::Target => target_contact(
                ball,
                session.position(defender),
                session.tuning.target_tolerance,
            ),
            EntityId::Keeper => keeper_contact(
                ball,
                session.position(defender),
                session.tuning.keeper_reach,
                session.tuning.keeper_clearance,
            ),
            EntityId::AimArrow | EntityId::Ball => false,
        };
        if contact {
            ShotOutcome::Contact
        } else {
            ShotOutcome::Clear
        }
    } else if ball.y < FLOOR_Y {
        ShotOutcome::Expired
    } else {
        ShotOutcome::InFlight
    }
}

/// Plane arrival test on the floored depth.
#[inline]
pub fn plane_reached(ball_z: f32, marker: i32) -> bool {
    ball_z.floor() == marker as f32
}

/// Practice window: both axes within tolerance of the target decal.
/// Height is floored before comparing, matching the plane test.
fn target_contact(ball: Vec3, target: Vec3, tolerance: Vec2) -> bool {
    (ball.x - target.x).abs() <= tolerance.x && (ball.y.floor() - target.y).abs() <= tolerance.y
}

/// Keeper window: horizontally within reach, and low enough that the
/// keeper can get a hand to it. The keeper's own height never enters
/// the test; a grounded keeper still covers the full clearance band.
fn keeper_contact(ball: Vec3, keeper: Vec3, reach: f32, clearance: f32) -> bool {
    (ball.x - keeper.x).abs() <= reach && ball.y.floor() <= clearance
}
