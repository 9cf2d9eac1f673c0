//! Mode rules
//!
//! One place owns what a plane arrival means: who scores, whether the
//! practice target jumps somewhere new, when the two-player turn
//! passes, and when a finished match resets. The flight and the oracle
//! stay mode-agnostic; only this module reads the mode.

use rand::Rng;

use super::flight;
use super::goal::ShotOutcome;
use super::state::{EntityId, GameEvent, GameSession, Mode, PendingMove, PlayerId};
use crate::consts::{KEEPER_SPAWN, TARGET_SPAWN};

/// Fold one shot outcome into the session.
///
/// Returns the notifications the embedder should surface, in the order
/// they happened. `InFlight` folds to nothing.
pub fn apply_outcome(session: &mut GameSession, outcome: ShotOutcome) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match outcome {
        ShotOutcome::InFlight => return events,
        ShotOutcome::Expired => {
            // Flight spent without an arrival; the unlock in reset_shot
            // makes the next shot resample the aim
            flight::reset_shot(session);
            events.push(GameEvent::ShotExpired);
            return events;
        }
        ShotOutcome::Contact | ShotOutcome::Clear => {}
    }

    let contact = outcome == ShotOutcome::Contact;
    match session.mode {
        Mode::Practice => {
            if contact {
                events.push(GameEvent::TargetHit);
                award(session, PlayerId::One, &mut events);
            } else {
                events.push(GameEvent::TargetMissed);
            }
            // Hit or miss, the target jumps once the ball has arrived
            relocate_target(session);
        }
        Mode::VsKeeper => {
            if contact {
                events.push(GameEvent::ShotBlocked);
            } else {
                events.push(GameEvent::GoalScored(PlayerId::One));
                award(session, PlayerId::One, &mut events);
            }
        }
        Mode::TwoPlayer => {
            let shooter = session.scoreboard.turn;
            if contact {
                events.push(GameEvent::ShotBlocked);
            } else {
                events.push(GameEvent::GoalScored(shooter));
                award(session, shooter, &mut events);
            }
            // Exactly one turn pass per arrival, scored or saved
            session.scoreboard.pass_turn();
            events.push(GameEvent::TurnPassed(session.scoreboard.turn));
        }
    }

    flight::reset_shot(session);
    events
}

/// Switch modes. Scores and any ball already in the air carry across;
/// the goal-mouth entities respawn, stale presses are dropped, and the
/// two-player turn goes back to player one.
pub fn switch_mode(session: &mut GameSession, mode: Mode) {
    if session.mode == mode {
        return;
    }
    log::info!("mode switch: {:?} -> {:?}", session.mode, mode);
    session.mode = mode;

    for entity in [EntityId::Target, EntityId::Keeper, EntityId::AimArrow] {
        session.pending[entity.index()] = PendingMove::default();
    }
    session.positions[EntityId::Target.index()] = TARGET_SPAWN;
    session.positions[EntityId::Keeper.index()] = KEEPER_SPAWN;
    session.scoreboard.turn = PlayerId::One;
}

/// Bump a player's score and run the win check.
fn award(session: &mut GameSession, player: PlayerId, events: &mut Vec<GameEvent>) {
    session.scoreboard.award(player);
    log::debug!(
        "score {:?}: {}",
        player,
        session.scoreboard.score(player)
    );

    if session.scoreboard.score(player) == session.tuning.max_score {
        // Scores are checked after every single increment, so the
        // opponent cannot also be sitting at the winning score
        debug_assert!(session.scoreboard.score(player.other()) < session.tuning.max_score);
        session.scoreboard.reset();
        events.push(GameEvent::MatchOver { winner: player });
        log::info!("match over, {player:?} wins");
    }
}

/// Jump the practice target to a fresh uniformly random legal spot.
fn relocate_target(session: &mut GameSession) {
    let bounds = session.tuning.target_bounds();
    let x = session.rng.random_range(bounds.min.x..=bounds.max.x);
    let y = session.rng.random_range(bounds.min.y..=bounds.max.y);
    let target = &mut session.positions[EntityId::Target.index()];
    target.x = x;
    target.y = y;
}
