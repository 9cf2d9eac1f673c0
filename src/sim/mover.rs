//! Axis-constrained movement
//!
//! Turns a consumed input mailbox into at most one position update, a
//! single step along a single axis. Out-of-bounds requests are rejected
//! whole: no clamping to the edge, no partial movement. Either way the
//! mailbox is lowered, so a rejected press costs the input and nothing
//! else.

use glam::Vec3;

use super::state::{EntityId, GameSession};
use crate::tuning::MoveBounds;

/// Entities the positioner moves, in consume order. The ball is absent
/// on purpose; its position belongs to the flight engine.
const MOVABLE: [EntityId; 3] = [EntityId::Target, EntityId::Keeper, EntityId::AimArrow];

/// Consume every raised mailbox.
pub fn apply_all_pending(session: &mut GameSession) {
    for entity in MOVABLE {
        apply_pending_move(session, entity);
    }
}

/// Consume the pending move for one entity, if any.
///
/// The mailbox is lowered regardless of whether the move was applied.
pub fn apply_pending_move(session: &mut GameSession, entity: EntityId) {
    let slot = &mut session.pending[entity.index()];
    if !slot.moved {
        return;
    }
    slot.moved = false;

    let Some(axis) = slot.axis else {
        return;
    };

    // Re-enforce axis exclusivity in case someone wrote the mailbox
    // directly instead of going through press()
    let step = slot.thrust[axis.index()];
    slot.thrust = Vec3::ZERO;
    slot.thrust[axis.index()] = step;

    let candidate = session.positions[entity.index()][axis.index()] + step;
    if let Some(bounds) = bounds_for(session, entity) {
        if !bounds.permits(axis.index(), candidate) {
            // Rejected at the boundary; position untouched
            return;
        }
    }
    session.positions[entity.index()][axis.index()] = candidate;
}

/// Movement bounds per entity. The aim arrow is unbounded here; its
/// offsets get clamped later by aim resolution.
fn bounds_for(session: &GameSession, entity: EntityId) -> Option<MoveBounds> {
    match entity {
        EntityId::Target => Some(session.tuning.target_bounds()),
        EntityId::Keeper => Some(session.tuning.keeper_bounds()),
        EntityId::AimArrow | EntityId::Ball => None,
    }
}
