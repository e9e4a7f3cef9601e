//! Render Snapshot
//!
//! Read-only projection of the session for a rendering collaborator.
//! Everything is converted to float pixel coordinates here, at the
//! simulation boundary; floats never flow back in. Avatar rotation is
//! derived from velocity at projection time - it has no simulation
//! effect.

use serde::{Deserialize, Serialize};

use crate::core::fixed::from_fixed;
use crate::game::config::EngineConfig;
use crate::game::state::{GamePhase, GameState, PipeHalf};

/// Degrees of tilt per px/tick of vertical velocity.
const TILT_PER_VELOCITY: f32 = 6.0;

/// Steepest upward tilt (degrees).
const TILT_MIN: f32 = -30.0;

/// Steepest downward tilt (degrees).
const TILT_MAX: f32 = 90.0;

/// Avatar as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    /// Horizontal position (pixels)
    pub x: f32,
    /// Vertical position (pixels)
    pub y: f32,
    /// Tilt angle in degrees; negative is nose-up
    pub rotation_deg: f32,
}

/// One obstacle segment as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipeSegmentView {
    /// Order index of the owning pair
    pub order: u32,
    /// Which half of the pair
    pub half: PipeHalf,
    /// Horizontal anchor (pixels)
    pub x: f32,
    /// Top edge (pixels)
    pub y: f32,
    /// Width (pixels)
    pub width: f32,
    /// Height (pixels)
    pub height: f32,
}

/// One decorative cloud.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudView {
    /// Horizontal position (pixels)
    pub x: f32,
    /// Vertical position (pixels)
    pub y: f32,
}

/// Complete renderable view of one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Session phase (drives title / game-over overlays)
    pub phase: GamePhase,
    /// Tick the snapshot was taken at
    pub tick: u32,
    /// Current session score
    pub score: u32,
    /// Best score across sessions
    pub best_score: u32,
    /// Viewport width (pixels)
    pub viewport_width: u32,
    /// Viewport height (pixels)
    pub viewport_height: u32,
    /// The avatar
    pub bird: BirdView,
    /// Every live obstacle segment, oldest pair first, top before bottom
    pub pipes: Vec<PipeSegmentView>,
    /// The cloud layer
    pub clouds: Vec<CloudView>,
    /// Ground scroll offset (pixels)
    pub ground_offset: f32,
}

/// Project the current state for rendering.
pub fn render_snapshot(state: &GameState, config: &EngineConfig) -> RenderSnapshot {
    let velocity = from_fixed(state.bird.velocity);
    let bird = BirdView {
        x: from_fixed(state.bird.x),
        y: from_fixed(state.bird.y),
        rotation_deg: (velocity * TILT_PER_VELOCITY).clamp(TILT_MIN, TILT_MAX),
    };

    let width = config.pipe_width as f32;
    let mut pipes = Vec::with_capacity(state.pipes.len() * 2);
    for pair in &state.pipes {
        let x = from_fixed(pair.x);
        for segment in [&pair.top, &pair.bottom] {
            pipes.push(PipeSegmentView {
                order: pair.order,
                half: segment.half,
                x,
                y: from_fixed(segment.y),
                width,
                height: from_fixed(segment.height),
            });
        }
    }

    let clouds = state
        .clouds
        .iter()
        .map(|cloud| CloudView {
            x: from_fixed(cloud.x),
            y: from_fixed(cloud.y),
        })
        .collect();

    RenderSnapshot {
        phase: state.phase,
        tick: state.tick,
        score: state.score,
        best_score: state.best_score,
        viewport_width: config.viewport_width,
        viewport_height: config.viewport_height,
        bird,
        pipes,
        clouds,
        ground_offset: from_fixed(state.ground_offset),
    }
}
