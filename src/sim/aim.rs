//! Aim resolution
//!
//! The aim arrow accumulates raw directional offsets; every tick this
//! module converts them into clamped rotation angles and writes the
//! clamped values back into the stored offsets. The write-back keeps
//! the drawn arrow honest: it can never point somewhere the shot is
//! not allowed to go, and held keys stop accumulating at the limit.

use glam::{Mat3, Vec3};

use super::state::{EntityId, GameSession};
use crate::consts::{AIM_SENSITIVITY, ARROW_SCALE};

/// Azimuth swing limit, radians
const AZIMUTH_LIMIT: f32 = 1.0;
/// Elevation ceiling, radians
const ELEVATION_MAX: f32 = 0.3;
/// Elevation floor, radians
const ELEVATION_MIN: f32 = -0.7;
/// Tightened elevation floor used near the azimuth extremes, where a
/// full lift would carry the ball wide anyway
const ELEVATION_MIN_TIGHT: f32 = -0.5;
/// Azimuth at or below this tightens the floor
const TIGHTEN_BELOW: f32 = -0.7;
/// Azimuth at or above this tightens the floor
const TIGHTEN_ABOVE: f32 = 0.6;

/// Clamped aim angles, radians
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimAngles {
    /// Pitch about x; negative leans the arrow toward the goal
    pub elevation: f32,
    /// Swing about z; positive sends the ball left
    pub azimuth: f32,
}

impl AimAngles {
    /// Orientation basis of the arrow, scaled like the drawn arrow so
    /// launch speed comes out of the same matrix the player sees.
    pub fn basis(&self) -> Mat3 {
        (Mat3::from_rotation_x(self.elevation) * Mat3::from_rotation_z(self.azimuth)) * ARROW_SCALE
    }

    /// Launch velocity for a shot taken at these angles.
    ///
    /// Components are read straight off the basis rows: lateral speed
    /// from the x row, lift from the y row, depth from the z row.
    pub fn launch_velocity(&self) -> Vec3 {
        let basis = self.basis();
        Vec3::new(basis.row(0).y, basis.row(1).y, basis.row(2).z)
    }
}

/// Clamp the arrow's accumulated offsets into legal angles, store the
/// result on the session, and sync the offsets with the clamp.
pub fn resolve(session: &mut GameSession) -> AimAngles {
    let offset = &mut session.positions[EntityId::AimArrow.index()];

    let azimuth = (offset.x / AIM_SENSITIVITY).clamp(-AZIMUTH_LIMIT, AZIMUTH_LIMIT);
    let floor = if azimuth <= TIGHTEN_BELOW || azimuth >= TIGHTEN_ABOVE {
        ELEVATION_MIN_TIGHT
    } else {
        ELEVATION_MIN
    };
    let elevation = (offset.z / AIM_SENSITIVITY).clamp(floor, ELEVATION_MAX);

    // Sync stored offsets so the next press accumulates from the
    // clamped value instead of from past the limit
    offset.x = azimuth * AIM_SENSITIVITY;
    offset.z = elevation * AIM_SENSITIVITY;

    let aim = AimAngles { elevation, azimuth };
    session.aim = aim;
    aim
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_offsets(x: f32, z: f32) -> GameSession {
        let mut session = GameSession::new(5);
        session.positions[EntityId::AimArrow.index()] = Vec3::new(x, 0.0, z);
        session
    }

    #[test]
    fn test_offsets_divide_into_angles() {
        let mut session = session_with_offsets(-3.0, 2.0);
        let aim = resolve(&mut session);
        assert!((aim.azimuth - (-0.3)).abs() < 1e-6);
        assert!((aim.elevation - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_clamps_and_writes_back() {
        let mut session = session_with_offsets(15.0, 0.0);
        let aim = resolve(&mut session);
        assert!((aim.azimuth - 1.0).abs() < 1e-6);
        // Stored offset snapped to the clamp so the limit is sticky
        let offset = session.position(EntityId::AimArrow);
        assert!((offset.x - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_ceiling() {
        let mut session = session_with_offsets(0.0, 9.0);
        let aim = resolve(&mut session);
        assert!((aim.elevation - 0.3).abs() < 1e-6);
        assert!((session.position(EntityId::AimArrow).z - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_floor_normal() {
        let mut session = session_with_offsets(0.0, -9.0);
        let aim = resolve(&mut session);
        assert!((aim.elevation - (-0.7)).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_floor_tightens_at_azimuth_extremes() {
        // Azimuth 0.6 sits exactly on the tighten threshold
        let mut session = session_with_offsets(6.0, -9.0);
        let aim = resolve(&mut session);
        assert!((aim.elevation - (-0.5)).abs() < 1e-6);
        assert!((session.position(EntityId::AimArrow).z - (-5.0)).abs() < 1e-6);

        // Same on the negative side
        let mut session = session_with_offsets(-7.0, -9.0);
        let aim = resolve(&mut session);
        assert!((aim.elevation - (-0.5)).abs() < 1e-6);

        // Just inside the band the full floor applies again
        let mut session = session_with_offsets(5.0, -9.0);
        let aim = resolve(&mut session);
        assert!((aim.elevation - (-0.7)).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut session = session_with_offsets(23.0, -14.0);
        let first = resolve(&mut session);
        let second = resolve(&mut session);
        assert_eq!(first, second);
    }

    #[test]
    fn test_straight_shot_velocity() {
        // No swing, no pitch: the ball goes straight at the goal with
        // lift and depth equal to the arrow scale
        let aim = AimAngles::default();
        let v0 = aim.launch_velocity();
        assert!(v0.x.abs() < 1e-6);
        assert!((v0.y - 2.0).abs() < 1e-6);
        assert!((v0.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_components_match_closed_form() {
        let aim = AimAngles {
            elevation: -0.4,
            azimuth: 0.25,
        };
        let v0 = aim.launch_velocity();
        assert!((v0.x - (-2.0 * 0.25f32.sin())).abs() < 1e-5);
        assert!((v0.y - (2.0 * 0.4f32.cos() * 0.25f32.cos())).abs() < 1e-5);
        assert!((v0.z - (2.0 * 0.4f32.cos())).abs() < 1e-5);
    }

    #[test]
    fn test_positive_azimuth_sends_ball_left() {
        let aim = AimAngles {
            elevation: 0.0,
            azimuth: 0.5,
        };
        assert!(aim.launch_velocity().x < 0.0);
    }
}
