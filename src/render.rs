//! Draw-call assembly for the rendering collaborator
//!
//! The core never draws. Once per tick the embedder calls
//! [`compose_frame`] and gets plain data back: a transform and material
//! per visible entity, plus the scoreboard text. Meshes, shaders and
//! fonts are the collaborator's business.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{ARROW_ANCHOR, ARROW_SCALE, BALL_RADIUS};
use crate::sim::{EntityId, GameSession, Mode, PlayerId};

/// Material the collaborator should bind for a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialId {
    Ball,
    Target,
    Keeper,
    AimArrow,
}

/// One shape to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub entity: EntityId,
    pub transform: Mat4,
    pub material: MaterialId,
}

/// Everything the collaborator needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub draws: Vec<DrawCall>,
    pub scoreboard: String,
}

/// Assemble the draw list for the current session state.
///
/// Always three calls: the active defender (practice target or keeper),
/// the aim arrow, and the ball.
pub fn compose_frame(session: &GameSession) -> Frame {
    let defender = session.defender();
    let defender_material = match defender {
        EntityId::Keeper => MaterialId::Keeper,
        _ => MaterialId::Target,
    };

    let draws = vec![
        DrawCall {
            entity: defender,
            transform: goal_mouth_transform(session, defender),
            material: defender_material,
        },
        DrawCall {
            entity: EntityId::AimArrow,
            transform: arrow_transform(session),
            material: MaterialId::AimArrow,
        },
        DrawCall {
            entity: EntityId::Ball,
            transform: ball_transform(session),
            material: MaterialId::Ball,
        },
    ];

    Frame {
        draws,
        scoreboard: scoreboard_line(session),
    }
}

/// Scoreboard text: both counters in two-player, player one otherwise.
pub fn scoreboard_line(session: &GameSession) -> String {
    match session.mode {
        Mode::TwoPlayer => format!(
            "{}:{}",
            session.scoreboard.score(PlayerId::One),
            session.scoreboard.score(PlayerId::Two)
        ),
        _ => format!("Score: {}", session.scoreboard.score(PlayerId::One)),
    }
}

fn ball_transform(session: &GameSession) -> Mat4 {
    Mat4::from_translation(session.position(EntityId::Ball))
        * Mat4::from_scale(Vec3::splat(BALL_RADIUS))
}

/// Target and keeper store world x/y; their depth is the goal line.
fn goal_mouth_transform(session: &GameSession, entity: EntityId) -> Mat4 {
    let pos = session.position(entity);
    Mat4::from_translation(Vec3::new(pos.x, pos.y, session.tuning.goal_line_z))
        * Mat4::from_scale(Vec3::splat(BALL_RADIUS))
}

fn arrow_transform(session: &GameSession) -> Mat4 {
    Mat4::from_translation(ARROW_ANCHOR)
        * Mat4::from_scale(Vec3::splat(ARROW_SCALE))
        * Mat4::from_rotation_x(session.aim.elevation)
        * Mat4::from_rotation_z(session.aim.azimuth)
}
