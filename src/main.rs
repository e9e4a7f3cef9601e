//! Skyhop Demo
//!
//! Headless demo session: an autopilot plays the game through the public
//! engine API, logging events as they happen, then the simulation's
//! determinism is verified by replaying a recorded signal schedule.

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use skyhop::core::fixed::{fixed_to_int, int_to_fixed, Fixed};
use skyhop::game::tick::replay_session;
use skyhop::{
    EngineConfig, FileScoreStore, FixedStepClock, FrameClock, GameEngine, GameEventData, GamePhase,
    TICK_RATE, VERSION,
};

/// Longest session the demo will play before giving up (ticks).
const MAX_DEMO_TICKS: u32 = 3600;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Skyhop Core v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let realtime = std::env::args().any(|arg| arg == "--realtime");

    demo_session(realtime);
    verify_determinism();
}

/// Pick the vertical target for the autopilot: the gap center of the
/// next pair ahead of the avatar, or mid-viewport when none exists.
fn autopilot_target(engine: &GameEngine) -> Fixed {
    let config = engine.config();
    let state = engine.state();
    let half_gap = int_to_fixed(config.pipe_gap / 2);

    state
        .pipes
        .iter()
        .find(|pair| pair.right_edge(config.pipe_width) > state.bird.x)
        .map(|pair| pair.top.height + half_gap)
        .unwrap_or_else(|| int_to_fixed(config.viewport_height as i32 / 2))
}

/// Play two autopilot sessions through the engine facade.
fn demo_session(realtime: bool) {
    info!("=== Starting Demo Session ===");

    let store_path = std::env::temp_dir().join("skyhop_best_score");
    let store = FileScoreStore::new(&store_path);
    info!("Best-score store: {}", store_path.display());

    let config = EngineConfig::with_viewport(1280, 720);
    let rng_seed = 12345u64;
    let mut engine =
        GameEngine::new(config, rng_seed, Box::new(store)).expect("demo config is valid");

    info!("RNG Seed: {}", rng_seed);
    info!("Persisted best: {}", engine.state().best_score);

    let mut clock = realtime.then(FixedStepClock::at_display_rate);

    for session in 1..=2 {
        info!("--- Session {} ---", session);

        // WAIT -> PLAYING
        engine.handle_activate_signal();

        for _ in 0..MAX_DEMO_TICKS {
            if let Some(clock) = clock.as_mut() {
                clock.wait_frame();
            }

            // Flap when falling below the target line
            let state = engine.state();
            if state.bird.velocity >= 0 && state.bird.y > autopilot_target(&engine) {
                engine.handle_activate_signal();
            }

            let result = engine.advance_frame();
            for event in &result.events {
                match &event.data {
                    GameEventData::PipeScored { order, score } => {
                        info!("Tick {}: passed pair {} (score {})", event.tick, order, score);
                    }
                    GameEventData::BestScoreRaised { best } => {
                        info!("Tick {}: new best score {}", event.tick, best);
                    }
                    GameEventData::SessionEnded { cause, score } => {
                        info!("Tick {}: session over ({:?}), score {}", event.tick, cause, score);
                    }
                    _ => {}
                }
            }

            if result.ended {
                break;
            }
        }

        if engine.state().phase == GamePhase::Playing {
            info!("Session survived {} ticks; stopping it here", MAX_DEMO_TICKS);
        }

        let snapshot = engine.render_snapshot();
        info!(
            "Final: score {}, best {}, {} live segments, bird at y={}",
            snapshot.score,
            snapshot.best_score,
            snapshot.pipes.len(),
            fixed_to_int(engine.state().bird.y)
        );
        info!(
            "Snapshot: {}",
            serde_json::to_string(&snapshot).expect("snapshot serializes")
        );

        // GAME_OVER -> WAIT for the next session
        if engine.state().phase == GamePhase::GameOver {
            engine.handle_activate_signal();
        }
    }
}

/// Verify that identical seeds and signal schedules reproduce identical
/// sessions.
fn verify_determinism() {
    info!("=== Verifying Determinism ===");

    let config = EngineConfig::with_viewport(1280, 720);
    let signals: Vec<bool> = (0..1200).map(|t| t % 23 == 0).collect();

    let (state1, events1) = replay_session(&config, 99999, &signals);
    let (state2, events2) = replay_session(&config, 99999, &signals);

    let json1 = serde_json::to_string(&state1).expect("state serializes");
    let json2 = serde_json::to_string(&state2).expect("state serializes");

    if json1 == json2 && events1 == events2 {
        info!(
            "DETERMINISM VERIFIED: {} events, final score {}",
            events1.len(),
            state1.score
        );
    } else {
        info!("DETERMINISM FAILURE: replays diverged!");
    }
}
