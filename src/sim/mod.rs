//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame tick, fixed shot-time step
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod aim;
pub mod flight;
pub mod goal;
pub mod modes;
pub mod mover;
pub mod state;
pub mod tick;

pub use aim::AimAngles;
pub use flight::flight_offset;
pub use goal::ShotOutcome;
pub use state::{
    Axis, EntityId, GameEvent, GameSession, Mode, PendingMove, PlayerId, Scoreboard, ShotState,
};
pub use tick::{TickInput, tick};
