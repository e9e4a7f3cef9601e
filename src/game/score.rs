//! Scoring Evaluator
//!
//! Credits each obstacle pair exactly once when the avatar passes its
//! right edge, and pushes best-score increases through the persistent
//! store. Both segments of a pair share one order index; membership in
//! the passed set is what prevents double counting.

use tracing::{info, warn};

use crate::core::fixed::int_to_fixed;
use crate::game::config::EngineConfig;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::host::store::ScoreStore;

/// Credit every newly passed pair and maintain the best score.
///
/// A pair is passed once `bird.x > pair.x + pipe_width`. Runs only while
/// PLAYING; the caller gates the phase but the guard here keeps the
/// function safe to call unconditionally.
pub fn update_score(state: &mut GameState, config: &EngineConfig, store: &mut dyn ScoreStore) {
    if !state.is_playing() {
        return;
    }

    let width = int_to_fixed(config.pipe_width);
    let mut credited: Vec<u32> = Vec::new();

    for pair in &state.pipes {
        if state.bird.x > pair.x + width && !state.passed.contains(&pair.order) {
            credited.push(pair.order);
        }
    }

    for order in credited {
        state.passed.insert(order);
        state.score += 1;

        let (tick, score) = (state.tick, state.score);
        state.push_event(GameEvent::pipe_scored(tick, order, score));

        if score > state.best_score {
            state.best_score = score;
            state.push_event(GameEvent::best_score_raised(tick, score));
            info!(best = score, "best score raised");

            if let Err(err) = store.write(score) {
                // Persistence is best-effort; the in-memory best stands
                warn!(%err, "failed to persist best score");
            }
        }
    }
}
