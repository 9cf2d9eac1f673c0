//! Ball flight
//!
//! Closed-form ballistics on a fixed shot clock. The launch velocity is
//! sampled exactly once per shot and the ball position is a pure
//! function of that velocity and shot time, so the same shot always
//! flies the same arc regardless of frame pacing or later aim input.

use glam::Vec3;

use super::state::{EntityId, GameSession};
use crate::consts::{BALL_SPAWN, SHOT_TIME_STEP};

/// Offset from the launch point after `t` units of shot time.
///
/// Lateral and depth motion are linear; lift decays quadratically under
/// the arc coefficient `k`. Depth is negated so positive launch depth
/// flies toward the goal.
#[inline]
pub fn flight_offset(v0: Vec3, k: f32, t: f32) -> Vec3 {
    Vec3::new(v0.x * t, v0.y * t - k * t * t, -v0.z * t)
}

/// Start a shot. Repeat triggers while a ball is in the air are ignored;
/// the current flight keeps its clock and its velocity.
pub fn trigger_shot(session: &mut GameSession) {
    if session.shot.in_flight {
        return;
    }
    session.shot.in_flight = true;
    session.shot.elapsed = 0.0;
    log::debug!(
        "shot triggered (azimuth {:.2}, elevation {:.2})",
        session.aim.azimuth,
        session.aim.elevation
    );
}

/// Advance an in-flight ball by one tick of shot time.
///
/// The first advance after a trigger samples and locks the launch
/// velocity from the current aim; later advances reuse the locked
/// value. Returns the ball's new position, or `None` when no shot is
/// underway.
pub fn advance_shot(session: &mut GameSession) -> Option<Vec3> {
    if !session.shot.in_flight {
        return None;
    }

    let v0 = match session.shot.velocity {
        Some(v0) => {
            session.shot.elapsed += SHOT_TIME_STEP;
            v0
        }
        None => {
            // Launch tick: freeze the velocity. From here on the aim
            // steers the arrow, not this ball.
            let v0 = session.aim.launch_velocity();
            session.shot.velocity = Some(v0);
            session.shot.elapsed = 0.0;
            v0
        }
    };

    let pos = BALL_SPAWN + flight_offset(v0, session.tuning.drag(), session.shot.elapsed);
    session.positions[EntityId::Ball.index()] = pos;
    Some(pos)
}

/// End the flight: clear the shot clock, drop the velocity lock, and
/// put the ball back on the spot. The next shot samples aim fresh.
pub fn reset_shot(session: &mut GameSession) {
    session.shot = Default::default();
    session.positions[EntityId::Ball.index()] = BALL_SPAWN;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::aim::{self, AimAngles};

    #[test]
    fn test_trajectory_matches_closed_form() {
        // Canonical arc: v0 = (2, 5, 3), k = 0.1, sampled at every
        // half-unit of shot time
        let v0 = Vec3::new(2.0, 5.0, 3.0);
        let k = 0.1;
        for n in 0..=10 {
            let t = 0.5 * n as f32;
            let expected = Vec3::new(2.0 * t, 5.0 * t - 0.1 * t * t, -3.0 * t);
            assert_eq!(flight_offset(v0, k, t), expected);
        }
    }

    #[test]
    fn test_shot_clock_steps_half_units() {
        let mut session = GameSession::new(3);
        trigger_shot(&mut session);

        // Launch tick is t = 0, each advance after adds 0.5
        advance_shot(&mut session);
        assert_eq!(session.shot.elapsed, 0.0);
        advance_shot(&mut session);
        assert_eq!(session.shot.elapsed, 0.5);
        advance_shot(&mut session);
        assert_eq!(session.shot.elapsed, 1.0);
    }

    #[test]
    fn test_session_ball_follows_closed_form() {
        let mut session = GameSession::new(3);
        session.positions[EntityId::AimArrow.index()] = Vec3::new(-3.0, 0.0, 2.0);
        aim::resolve(&mut session);
        let v0 = session.aim.launch_velocity();
        let k = session.tuning.drag();

        trigger_shot(&mut session);
        for n in 0..=8 {
            let pos = advance_shot(&mut session).expect("shot in flight");
            let t = 0.5 * n as f32;
            assert_eq!(pos, BALL_SPAWN + flight_offset(v0, k, t));
        }
    }

    #[test]
    fn test_velocity_locks_at_launch() {
        // Launch at elevation 0.2, azimuth -0.3
        let mut session = GameSession::new(3);
        session.positions[EntityId::AimArrow.index()] = Vec3::new(-3.0, 0.0, 2.0);
        aim::resolve(&mut session);
        trigger_shot(&mut session);

        advance_shot(&mut session);
        let locked = session.shot.velocity.expect("velocity locked at launch");
        advance_shot(&mut session);
        advance_shot(&mut session);

        // Yank the aim to (0.3, 1.0) mid-flight
        session.positions[EntityId::AimArrow.index()] = Vec3::new(10.0, 0.0, 3.0);
        aim::resolve(&mut session);
        let pos = advance_shot(&mut session).expect("shot in flight");

        assert_eq!(session.shot.velocity, Some(locked));
        // Position still follows the locked velocity
        let k = session.tuning.drag();
        assert_eq!(pos, BALL_SPAWN + flight_offset(locked, k, 1.5));
    }

    #[test]
    fn test_retrigger_mid_flight_is_ignored() {
        let mut session = GameSession::new(3);
        aim::resolve(&mut session);
        trigger_shot(&mut session);
        advance_shot(&mut session);
        advance_shot(&mut session);

        let elapsed = session.shot.elapsed;
        let velocity = session.shot.velocity;
        trigger_shot(&mut session);

        // Neither the clock nor the lock was disturbed
        assert_eq!(session.shot.elapsed, elapsed);
        assert_eq!(session.shot.velocity, velocity);
    }

    #[test]
    fn test_reset_returns_ball_and_unlocks() {
        let mut session = GameSession::new(3);
        aim::resolve(&mut session);
        trigger_shot(&mut session);
        for _ in 0..5 {
            advance_shot(&mut session);
        }
        assert!(session.shot.locked());

        reset_shot(&mut session);
        assert!(!session.shot.in_flight);
        assert!(!session.shot.locked());
        assert_eq!(session.position(EntityId::Ball), BALL_SPAWN);
    }

    #[test]
    fn test_resample_after_reset_uses_new_aim() {
        let mut session = GameSession::new(3);
        session.positions[EntityId::AimArrow.index()] = Vec3::new(4.0, 0.0, -2.0);
        aim::resolve(&mut session);
        trigger_shot(&mut session);
        advance_shot(&mut session);
        let first = session.shot.velocity.expect("locked");
        reset_shot(&mut session);

        // New aim, new shot, new velocity
        session.positions[EntityId::AimArrow.index()] = Vec3::new(-6.0, 0.0, 1.0);
        aim::resolve(&mut session);
        trigger_shot(&mut session);
        advance_shot(&mut session);
        let second = session.shot.velocity.expect("locked");

        assert_ne!(first, second);
        assert_eq!(second, AimAngles { elevation: 0.1, azimuth: -0.6 }.launch_velocity());
    }

    #[test]
    fn test_advance_without_shot_is_none() {
        let mut session = GameSession::new(3);
        assert_eq!(advance_shot(&mut session), None);
        assert_eq!(session.position(EntityId::Ball), BALL_SPAWN);
    }
}
