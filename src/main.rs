//! Spot Kick entry point
//!
//! Headless demo driver: scripts a handful of penalties through each
//! mode and logs what the simulation reports. The rendering
//! collaborator is stood in for by the composed-frame scoreboard.

use std::time::{SystemTime, UNIX_EPOCH};

use spot_kick::Tuning;
use spot_kick::render;
use spot_kick::sim::{Axis, EntityId, GameSession, Mode, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or(0)
        });
    let tuning = match std::env::args().nth(2) {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };

    log::info!("Spot Kick starting with seed {seed}");
    let mut session = GameSession::with_tuning(seed, tuning);

    // Warm up on the practice target; the dipped first shot lands on
    // the spawn spot, the rest chase the relocated decal
    run_shot(&mut session, 0, -5);
    run_shot(&mut session, 5, 2);
    run_shot(&mut session, -4, 1);

    switch_mode(&mut session, Mode::VsKeeper);
    run_shot(&mut session, 2, 0);
    // Drag the keeper off center, then put a low shot on that side
    for _ in 0..3 {
        session.press(EntityId::Keeper, Axis::LeftRight, -1.0);
        tick(&mut session, &TickInput::default());
    }
    run_shot(&mut session, -2, -3);

    switch_mode(&mut session, Mode::TwoPlayer);
    for round in 0..4 {
        let lateral = if round % 2 == 0 { 5 } else { -5 };
        run_shot(&mut session, lateral, 1);
    }

    let frame = render::compose_frame(&session);
    for draw in &frame.draws {
        log::debug!("draw {:?} with {:?}", draw.entity, draw.material);
    }
    println!("Final scoreboard after {} ticks: {}", session.time_ticks, frame.scoreboard);
}

/// Read tuning from a JSON file, falling back to defaults on any error.
fn load_tuning(path: &str) -> Tuning {
    let parsed = std::fs::read_to_string(path)
        .ok()
        .and_then(|json| Tuning::from_json_str(&json).ok());
    match parsed {
        Some(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        None => {
            log::warn!("Could not load tuning from {path}, using defaults");
            Tuning::default()
        }
    }
}

/// Nudge the aim arrow, pull the trigger, then tick until the shot
/// resolves. One press per tick, the way a player would tap keys.
fn run_shot(session: &mut GameSession, lateral: i32, lift: i32) {
    let idle = TickInput::default();

    for _ in 0..lateral.abs() {
        session.press(EntityId::AimArrow, Axis::LeftRight, lateral.signum() as f32);
        tick(session, &idle);
    }
    for _ in 0..lift.abs() {
        session.press(EntityId::AimArrow, Axis::ForwardBackward, lift.signum() as f32);
        tick(session, &idle);
    }

    let mut events = tick(
        session,
        &TickInput {
            shoot: true,
            mode: None,
        },
    );
    // Small angles always reach the plane within a few dozen ticks
    for _ in 0..200 {
        if !events.is_empty() {
            break;
        }
        events = tick(session, &idle);
    }

    for event in &events {
        log::info!("[tick {}] {event:?}", session.time_ticks);
    }
    log::info!("{}", render::scoreboard_line(session));
}

fn switch_mode(session: &mut GameSession, mode: Mode) {
    tick(
        session,
        &TickInput {
            shoot: false,
            mode: Some(mode),
        },
    );
}
