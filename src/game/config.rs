//! Engine Configuration
//!
//! All tuning constants and viewport dimensions ride in one injected
//! struct - no ambient globals. Defaults come from `core::fixed`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fixed::{
    Fixed, BIRD_SPAWN_X, BOUNDS_MARGIN, FLAP_IMPULSE, GRAVITY, PIPE_GAP, PIPE_MIN_TOP, PIPE_WIDTH,
    SCROLL_SPEED, SPACING_MAX, SPACING_MIN, SPACING_SCALE,
};

/// Configuration rejected at construction or resize.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Viewport has a zero dimension.
    #[error("viewport dimensions must be non-zero (got {width}x{height})")]
    ZeroViewport {
        /// Offending width (pixels)
        width: u32,
        /// Offending height (pixels)
        height: u32,
    },

    /// Vertical gap leaves no room for both obstacle segments.
    #[error("vertical gap of {gap}px plus {min_top}px headroom does not fit a {height}px viewport")]
    GapTooLarge {
        /// Configured gap (pixels)
        gap: i32,
        /// Minimum top-segment height (pixels)
        min_top: i32,
        /// Viewport height (pixels)
        height: u32,
    },
}

/// Simulation configuration.
///
/// Constructed once and injected into the engine; `viewport_*` are the only
/// fields that change after construction (via the resize operation).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Viewport width (pixels)
    pub viewport_width: u32,
    /// Viewport height (pixels)
    pub viewport_height: u32,

    /// Gravity per tick (Fixed, px/tick^2)
    pub gravity: Fixed,
    /// Flap impulse velocity (Fixed, px/tick; negative is up)
    pub flap_impulse: Fixed,
    /// Obstacle scroll speed (Fixed, px/tick)
    pub scroll_speed: Fixed,

    /// Avatar horizontal position (pixels)
    pub bird_x: i32,

    /// Obstacle segment width (pixels)
    pub pipe_width: i32,
    /// Vertical gap between pair segments (pixels)
    pub pipe_gap: i32,
    /// Minimum top-segment height and random roll offset (pixels)
    pub pipe_min_top: i32,

    /// Horizontal spacing scale factor
    pub spacing_scale: i32,
    /// Lower spacing clamp (pixels)
    pub spacing_min: i32,
    /// Upper spacing clamp (pixels)
    pub spacing_max: i32,

    /// Out-of-bounds margin past the viewport edges (pixels)
    pub bounds_margin: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            bird_x: BIRD_SPAWN_X,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_min_top: PIPE_MIN_TOP,
            spacing_scale: SPACING_SCALE,
            spacing_min: SPACING_MIN,
            spacing_max: SPACING_MAX,
            bounds_margin: BOUNDS_MARGIN,
        }
    }
}

impl EngineConfig {
    /// Default tuning with an explicit viewport.
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Check the configuration against the current viewport.
    ///
    /// Called at construction and again on every resize, since a shrinking
    /// viewport can invalidate a previously fine gap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::ZeroViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        // Spawn invariant: top + gap + bottom == viewport height, with
        // top >= pipe_min_top. The gap must leave that headroom.
        if self.pipe_gap.saturating_add(self.pipe_min_top) >= self.viewport_height as i32 {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                min_top: self.pipe_min_top,
                height: self.viewport_height,
            });
        }

        Ok(())
    }
}
