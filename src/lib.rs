//! Spot Kick - a 3D penalty-shootout mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, aiming, ballistics, modes)
//! - `render`: Draw-call assembly for the rendering collaborator
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GameSession, Mode, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Shot time advances by this much per engine tick (not wall-clock)
    pub const SHOT_TIME_STEP: f32 = 0.5;

    /// Divisor turning accumulated aim offsets into radians
    pub const AIM_SENSITIVITY: f32 = 10.0;
    /// Uniform scale of the aim arrow; also scales the sampled launch speed
    pub const ARROW_SCALE: f32 = 2.0;

    /// Ball radius, world units
    pub const BALL_RADIUS: f32 = 0.8;

    /// Where the ball sits before launch (the penalty spot)
    pub const BALL_SPAWN: Vec3 = Vec3::new(0.0, 0.9, 8.0);
    /// Aim arrow anchor, on the ground at the penalty spot
    pub const ARROW_ANCHOR: Vec3 = Vec3::new(0.0, 0.0, 8.0);
    /// Practice target spawn, centered in the goal mouth
    pub const TARGET_SPAWN: Vec3 = Vec3::new(0.0, 3.0, 0.0);
    /// Keeper spawn, centered on the goal line
    pub const KEEPER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// A ball below this height is down; a flight that never reached the
    /// scoring plane ends here
    pub const FLOOR_Y: f32 = -1.0;
}
