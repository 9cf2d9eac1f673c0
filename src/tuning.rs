//! Gameplay tuning and goal geometry
//!
//! Everything a designer might want to rebalance without touching code.
//! A session takes a copy at creation; values never change mid-session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular movement bounds on the two constrained axes
/// (index 0 = left/right, index 1 = up/down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl MoveBounds {
    /// Whether `candidate` is a legal coordinate on `axis`.
    ///
    /// Only axes 0 and 1 are bounded; anything else is unconstrained.
    pub fn permits(&self, axis: usize, candidate: f32) -> bool {
        match axis {
            0 => (self.min.x..=self.max.x).contains(&candidate),
            1 => (self.min.y..=self.max.y).contains(&candidate),
            _ => true,
        }
    }
}

/// Goal geometry and game balance knobs
///
/// Loaded from JSON (missing fields keep their defaults) or constructed
/// with [`Tuning::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Distance between the posts
    pub goal_width: f32,
    /// Goal height; also shapes the shot arc (taller goal = flatter arc)
    pub goal_height: f32,
    /// Nominal goal-line depth, where goal-mouth entities are drawn
    pub goal_line_z: f32,
    /// Scoring-plane marker: the ball arrives when floor(ball.z) equals this
    pub plane_marker: i32,
    /// Practice-target acceptance half-widths (x, y)
    pub target_tolerance: Vec2,
    /// Keeper horizontal reach half-width
    pub keeper_reach: f32,
    /// Keeper head clearance; floored ball heights above this sail over
    pub keeper_clearance: f32,
    /// First player to reach this score wins the match
    pub max_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            goal_width: 14.0,
            goal_height: 10.0,
            goal_line_z: -7.0,
            plane_marker: -18,
            target_tolerance: Vec2::new(2.0, 3.0),
            keeper_reach: 2.0,
            keeper_clearance: 7.0,
            max_score: 5,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Absent fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Arc-shaping coefficient for the vertical flight term.
    ///
    /// Scales inversely with goal height so shots at a taller goal fly
    /// flatter. This is game feel, not gravity.
    pub fn drag(&self) -> f32 {
        0.1 * (10.0 / self.goal_height)
    }

    /// Legal movement rectangle for the practice target: the goal mouth
    /// plus a one-unit skirt past each post, and a vertical band from
    /// just below the bar line to a bit above half height.
    pub fn target_bounds(&self) -> MoveBounds {
        MoveBounds {
            min: Vec2::new(-self.goal_width / 2.0 - 1.0, -2.0),
            max: Vec2::new(self.goal_width / 2.0 + 1.0, self.goal_height / 2.0 + 2.0),
        }
    }

    /// Legal movement rectangle for the keeper: same horizontal band as
    /// the target, but pinned near the ground.
    pub fn keeper_bounds(&self) -> MoveBounds {
        MoveBounds {
            min: Vec2::new(-self.goal_width / 2.0 - 1.0, 0.0),
            max: Vec2::new(self.goal_width / 2.0 + 1.0, 2.0),
        }
    }
}
