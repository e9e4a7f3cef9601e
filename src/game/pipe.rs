//! Obstacle Spawning and Scrolling
//!
//! Deterministic pipe-pair creation driven by horizontal spacing, plus
//! scrolling and off-screen pruning. All randomness comes from the
//! session RNG.

use tracing::debug;

use crate::core::fixed::int_to_fixed;
use crate::game::config::EngineConfig;
use crate::game::events::GameEvent;
use crate::game::state::{GameState, PipePair};

/// Horizontal distance between consecutive pairs (pixels).
///
/// Scales with the viewport aspect ratio so portrait windows spread the
/// pairs out and wide windows pack them closer, clamped to
/// `[spacing_min, spacing_max]`.
#[inline]
pub fn horizontal_spacing(config: &EngineConfig) -> i32 {
    let normal = (config.spacing_scale as i64 * config.viewport_height as i64
        / config.viewport_width as i64) as i32;

    normal.clamp(config.spacing_min, config.spacing_max)
}

/// Spawn a new pair when the newest one has scrolled far enough left.
///
/// A new pair appears at `x = viewport_width` once no pair exists or the
/// newest pair's x has passed `viewport_width - horizontal_spacing`. The
/// pair's order index is `pairs_spawned + 1`, shared by both segments.
pub fn maybe_spawn_pair(state: &mut GameState, config: &EngineConfig) {
    let spacing = horizontal_spacing(config);
    let threshold = int_to_fixed(config.viewport_width as i32 - spacing);

    let due = match state.newest_pair() {
        None => true,
        Some(pair) => pair.x < threshold,
    };
    if !due {
        return;
    }

    let height = config.viewport_height;

    // Top height rolls uniformly in [min_top, height/2 + min_top)
    let top_height = state.rng.next_int(height / 2) as i32 + config.pipe_min_top;
    // Spawn invariant: top + gap + bottom == viewport height. The clamp
    // only engages on viewports small enough that the roll eats the gap.
    let bottom_height = (height as i32 - config.pipe_gap - top_height).max(0);

    let order = state.pairs_spawned + 1;
    state.pairs_spawned = order;

    let pair = PipePair::new(
        order,
        int_to_fixed(config.viewport_width as i32),
        top_height,
        bottom_height,
        height,
    );
    state.pipes.push(pair);

    debug!(order, top_height, bottom_height, "pipe pair spawned");
    let tick = state.tick;
    state.push_event(GameEvent::pipe_spawned(tick, order, top_height, bottom_height));
}

/// Move every live pair left by the scroll speed.
pub fn scroll_pipes(state: &mut GameState, config: &EngineConfig) {
    for pair in &mut state.pipes {
        pair.x -= config.scroll_speed;
    }
}

/// Drop pairs that have fully left the viewport.
///
/// A pair is gone once its right edge (`x + pipe_width`) is left of zero.
/// Removal only ever takes the oldest pairs, so the newest-pair spacing
/// rule is unaffected.
pub fn prune_offscreen(state: &mut GameState, config: &EngineConfig) {
    let pipe_width = config.pipe_width;
    let before = state.pipes.len();

    state.pipes.retain(|pair| pair.right_edge(pipe_width) >= 0);

    let dropped = before - state.pipes.len();
    if dropped > 0 {
        debug!(dropped, "pruned off-screen pipe pairs");
    }
}
