use tracing::{info, warn};

// Import from the library crate
use sanic::{logging, controller, model};

use controller::{FrameEvent, GameSession, LandingOutcome, LoggingHost, PlayerInput};
use model::{ArcadeBody, PlayerConfig};

const FRAME_MS: f32 = 1000.0 / 60.0;

const IDLE: PlayerInput = PlayerInput { press_left: false, press_right: false, press_jump: false };
const LEFT: PlayerInput = PlayerInput { press_left: true, press_right: false, press_jump: false };
const RIGHT: PlayerInput = PlayerInput { press_left: false, press_right: true, press_jump: false };
const JUMP: PlayerInput = PlayerInput { press_left: false, press_right: false, press_jump: true };

/// Scripted input timeline: (frames to hold, input)
fn demo_script() -> Vec<(u32, PlayerInput)> {
    vec![
        (30, IDLE),
        // Standing jump lands flat
        (1, JUMP),
        (150, IDLE),
        // Run right, reverse, coast to a stop
        (60, RIGHT),
        (40, LEFT),
        (90, IDLE),
        // Full-speed jump spins too far and crashes
        (90, RIGHT),
        (1, JUMP),
        (150, IDLE),
        // Wait out the respawn
        (70, IDLE),
        (30, LEFT),
        (60, IDLE),
    ]
}

#[derive(Default)]
struct Tally {
    jumps: u32,
    clean: u32,
    crashes: u32,
    deaths: u32,
    respawns: u32,
}

fn main() {
    logging::init();

    let config = PlayerConfig::default();
    let body = ArcadeBody::new(config.spawn, config.max_speed);
    let mut session = GameSession::new(config, body, LoggingHost::default(), LoggingHost::default());
    let mut tally = Tally::default();

    for (frames, input) in demo_script() {
        for _ in 0..frames {
            for event in session.tick(input, FRAME_MS) {
                info!(?event, frame = session.frame_count(), x = session.body().position.x);
                match event {
                    FrameEvent::Jumped => tally.jumps += 1,
                    FrameEvent::Landed(LandingOutcome::Success) => tally.clean += 1,
                    FrameEvent::Landed(LandingOutcome::Fail) => tally.crashes += 1,
                    FrameEvent::Landed(LandingOutcome::None) => {}
                    FrameEvent::Died => tally.deaths += 1,
                    FrameEvent::Respawned => tally.respawns += 1,
                }
            }
        }
    }

    if session.is_respawn_pending() {
        warn!("demo ended with a respawn pending");
    }
    session.teardown();

    info!(
        frames = session.frame_count(),
        jumps = tally.jumps,
        clean = tally.clean,
        crashes = tally.crashes,
        deaths = tally.deaths,
        respawns = tally.respawns,
        "demo finished"
    );
}
