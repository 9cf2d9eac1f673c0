//! Per-frame simulation tick
//!
//! One call per rendered frame, driven by the embedder's frame clock.
//! Order inside a tick is fixed: mode switch, mailbox consumption, aim
//! resolution, shot trigger, flight advance, plane evaluation, mode
//! rules. Everything downstream of the mailboxes is deterministic.

use super::aim;
use super::flight;
use super::goal;
use super::modes;
use super::mover;
use super::state::{GameEvent, GameSession, Mode};

/// One-shot commands for a single tick
///
/// The embedder builds a fresh value each frame from whatever its input
/// collaborator captured; directional presses go through
/// [`GameSession::press`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Launch the ball; ignored while a shot is already in flight
    pub shoot: bool,
    /// Switch game mode
    pub mode: Option<Mode>,
}

/// Advance the whole session by one frame.
///
/// Returns the events this frame produced, in order.
pub fn tick(session: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    session.time_ticks += 1;

    if let Some(mode) = input.mode {
        modes::switch_mode(session, mode);
    }

    mover::apply_all_pending(session);
    aim::resolve(session);

    if input.shoot {
        flight::trigger_shot(session);
    }

    let outcome = match flight::advance_shot(session) {
        Some(_) => goal::evaluate(session),
        None => goal::ShotOutcome::InFlight,
    };
    modes::apply_outcome(session, outcome)
}
