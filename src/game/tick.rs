//! Frame Advance
//!
//! The per-frame update loop. One call mutates the session by exactly
//! one tick, in a fixed sub-step order so a snapshot taken afterwards
//! never observes a half-updated frame:
//!
//! 1. physics (avatar integration, world scroll)
//! 2. collision evaluation
//! 3. scoring
//! 4. spawn decision and pruning
//! 5. decor

use tracing::info;

use crate::core::fixed::{fixed_mul, int_to_fixed};
use crate::game::collision::check_bird_collision;
use crate::game::config::EngineConfig;
use crate::game::events::GameEvent;
use crate::game::pipe::{maybe_spawn_pair, prune_offscreen, scroll_pipes};
use crate::game::score::update_score;
use crate::game::state::{GamePhase, GameState};
use crate::host::store::{InMemoryScoreStore, ScoreStore};

/// Result of one frame advance.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the session is in GAME_OVER after this tick
    pub ended: bool,
}

/// Route an activate signal by phase.
///
/// WAIT: start the session, avatar untouched. PLAYING: flap. GAME_OVER:
/// full reset back to WAIT. No other transition exists.
pub fn handle_activate(state: &mut GameState, config: &EngineConfig) {
    match state.phase {
        GamePhase::Wait => {
            info!("session started");
            state.begin_session();
        }
        GamePhase::Playing => {
            state.bird.flap(config.flap_impulse);
        }
        GamePhase::GameOver => {
            info!(score = state.score, "session reset");
            state.reset_session(config);
        }
    }
}

/// Run one frame.
///
/// WAIT only animates decor; GAME_OVER is frozen entirely. While
/// PLAYING, the frame either leaves the phase unchanged or transitions
/// to GAME_OVER - nothing else.
pub fn advance(state: &mut GameState, config: &EngineConfig, store: &mut dyn ScoreStore) -> TickResult {
    let mut result = TickResult::default();

    match state.phase {
        GamePhase::Wait => {
            update_decor(state, config);
            result.events = state.take_events();
            return result;
        }
        GamePhase::GameOver => {
            result.ended = true;
            result.events = state.take_events();
            return result;
        }
        GamePhase::Playing => {
            // Continue with main simulation
        }
    }

    // 0. Advance tick counter
    state.tick += 1;

    // 1. Physics: avatar integration, then world scroll
    state.bird.integrate(config.gravity);
    scroll_pipes(state, config);

    // 2. Collision: any hit ends the session this frame
    if let Some(cause) = check_bird_collision(state, config) {
        info!(?cause, score = state.score, "session ended");
        state.end_session(cause);
        result.ended = true;
        result.events = state.take_events();
        return result;
    }

    // 3. Scoring
    update_score(state, config, store);

    // 4. Spawning and pruning
    maybe_spawn_pair(state, config);
    prune_offscreen(state, config);

    // 5. Decor
    update_decor(state, config);

    result.events = state.take_events();
    result
}

/// Scroll the cloud layer and ground. Purely cosmetic.
fn update_decor(state: &mut GameState, config: &EngineConfig) {
    let viewport_width = int_to_fixed(config.viewport_width as i32);

    for cloud in &mut state.clouds {
        cloud.x -= fixed_mul(config.scroll_speed, cloud.parallax);
        // Wrap around once fully off the left edge (clouds are ~100px)
        if cloud.x < -int_to_fixed(100) {
            cloud.x += viewport_width + int_to_fixed(200);
        }
    }

    state.ground_offset += config.scroll_speed;
    if state.ground_offset >= viewport_width {
        state.ground_offset -= viewport_width;
    }
}

/// Re-run a session from a per-tick activate schedule.
///
/// `signals[t]` is whether the activate signal fired before tick `t`.
/// Returns the final state and every event in order. Given the same
/// config, seed and schedule, the result is always identical.
pub fn replay_session(
    config: &EngineConfig,
    seed: u64,
    signals: &[bool],
) -> (GameState, Vec<GameEvent>) {
    let mut state = GameState::new(config, seed);
    let mut store = InMemoryScoreStore::new();
    let mut all_events = Vec::new();

    for &activate in signals {
        if activate {
            handle_activate(&mut state, config);
        }
        let result = advance(&mut state, config, &mut store);
        all_events.extend(result.events);
    }

    (state, all_events)
}
