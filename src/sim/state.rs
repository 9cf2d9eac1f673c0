//! Session state and core simulation types
//!
//! Everything a tick mutates lives on one owned [`GameSession`]; no
//! globals, no hidden statics. Embedders hold the session and feed it
//! inputs, the tick does the rest.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::AimAngles;
use crate::consts::*;
use crate::tuning::Tuning;

/// Movement axes, in component order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// x, swing across the goal mouth
    LeftRight,
    /// y, vertical
    UpDown,
    /// z, toward or away from the goal
    ForwardBackward,
}

impl Axis {
    /// Component index into a position or thrust vector
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Every simulated entity, used to index the per-entity tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityId {
    /// Practice decal the player shoots at
    Target,
    /// Goalkeeper blocking the versus modes
    Keeper,
    /// Direction arrow at the penalty spot
    AimArrow,
    /// The ball itself
    Ball,
}

impl EntityId {
    pub const COUNT: usize = 4;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Single-slot input mailbox for one entity
///
/// Holds at most one pending move. Rapid presses between ticks overwrite
/// each other; the tick consumes whatever the last press left behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingMove {
    /// Signed step per axis; only the selected axis may be nonzero
    pub thrust: Vec3,
    /// Axis the most recent press selected
    pub axis: Option<Axis>,
    /// Raised on press, lowered when the move is consumed
    pub moved: bool,
}

/// One ball flight, from trigger to plane arrival or expiry
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotState {
    /// A shot is underway
    pub in_flight: bool,
    /// Shot time in flight units; advances by [`SHOT_TIME_STEP`] per tick
    pub elapsed: f32,
    /// Launch velocity, sampled once at launch. `Some` means locked:
    /// aim changes steer the arrow, not this ball.
    pub velocity: Option<Vec3>,
}

impl ShotState {
    #[inline]
    pub fn locked(&self) -> bool {
        self.velocity.is_some()
    }
}

/// The two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opponent
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Active game mode, switchable at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Shoot at a relocating target decal; only player one scores
    #[default]
    Practice,
    /// Beat the keeper; only player one scores
    VsKeeper,
    /// Alternate penalties, each player defending against the other
    TwoPlayer,
}

/// Score counters plus, in two-player, whose turn it is
#[derive(Debug, Clone, Copy)]
pub struct Scoreboard {
    pub scores: [u32; 2],
    pub turn: PlayerId,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            scores: [0, 0],
            turn: PlayerId::One,
        }
    }
}

impl Scoreboard {
    #[inline]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    pub fn award(&mut self, player: PlayerId) {
        self.scores[player.index()] += 1;
    }

    pub fn pass_turn(&mut self) {
        self.turn = self.turn.other();
    }

    pub fn reset(&mut self) {
        self.scores = [0, 0];
    }
}

/// Notifications a tick produces for the embedder (HUD, sound, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Practice target struck
    TargetHit,
    /// Ball reached the plane clear of the practice target
    TargetMissed,
    /// Ball beat the keeper
    GoalScored(PlayerId),
    /// Keeper got a hand to it
    ShotBlocked,
    /// Ball came down before ever reaching the goal plane
    ShotExpired,
    /// Two-player turn passed to this player
    TurnPassed(PlayerId),
    /// A player reached the winning score; both counters were reset
    MatchOver { winner: PlayerId },
}

/// Complete per-session state, owned by the embedder and advanced by
/// [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Gameplay tuning, fixed for the session
    pub tuning: Tuning,
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG driving practice-target relocation
    pub(crate) rng: Pcg32,
    /// World position per entity; the arrow slot stores accumulated aim
    /// offsets rather than a world position
    pub positions: [Vec3; EntityId::COUNT],
    /// Input mailbox per entity
    pub pending: [PendingMove; EntityId::COUNT],
    /// Aim angles as of the last resolve
    pub aim: AimAngles,
    /// Current flight, if any
    pub shot: ShotState,
    /// Active mode
    pub mode: Mode,
    /// Scores and turn
    pub scoreboard: Scoreboard,
    /// Tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a session with canonical tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut positions = [Vec3::ZERO; EntityId::COUNT];
        positions[EntityId::Target.index()] = TARGET_SPAWN;
        positions[EntityId::Keeper.index()] = KEEPER_SPAWN;
        positions[EntityId::Ball.index()] = BALL_SPAWN;

        Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            positions,
            pending: [PendingMove::default(); EntityId::COUNT],
            aim: AimAngles::default(),
            shot: ShotState::default(),
            mode: Mode::default(),
            scoreboard: Scoreboard::default(),
            time_ticks: 0,
        }
    }

    /// Record a directional button press for `entity`.
    ///
    /// Writes the single-slot mailbox: a second press before the next
    /// tick replaces the first entirely, including its axis. The other
    /// two thrust components are zeroed here so a consumed move can
    /// only ever step along one axis.
    pub fn press(&mut self, entity: EntityId, axis: Axis, magnitude: f32) {
        let slot = &mut self.pending[entity.index()];
        slot.thrust = Vec3::ZERO;
        slot.thrust[axis.index()] = magnitude;
        slot.axis = Some(axis);
        slot.moved = true;
    }

    #[inline]
    pub fn position(&self, entity: EntityId) -> Vec3 {
        self.positions[entity.index()]
    }

    /// The entity defending the goal under the current mode
    pub fn defender(&self) -> EntityId {
        match self.mode {
            Mode::Practice => EntityId::Target,
            Mode::VsKeeper | Mode::TwoPlayer => EntityId::Keeper,
        }
    }
}
