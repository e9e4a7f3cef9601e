//! Q16.16 Fixed-Point Arithmetic
//!
//! Deterministic fixed-point math for the simulation. All gameplay values
//! (positions, velocities, parallax factors) are integers in this format -
//! no floats anywhere in the tick loop.
//!
//! ## Format: Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.16 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                    │
//! │   │  └──── 16 bits ────┘└──── 16 bits ────┘                 │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -32768.0 to +32767.99998 (approx)                   │
//! │  Precision: 1/65536 ≈ 0.000015 units                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! One unit is one viewport pixel; 32k of range covers any realistic
//! viewport, and sub-pixel precision keeps gravity integration smooth.

/// Q16.16 fixed-point number stored as i32.
/// 16 bits integer, 16 bits fractional.
pub type Fixed = i32;

/// Number of fractional bits (16)
pub const FIXED_SCALE: i32 = 16;

/// 1.0 in fixed-point (65536)
pub const FIXED_ONE: Fixed = 1 << FIXED_SCALE; // 65536

/// 0.5 in fixed-point (32768)
pub const FIXED_HALF: Fixed = FIXED_ONE >> 1; // 32768

// =============================================================================
// GAME CONSTANTS (All as integer literals - NO float conversion!)
// =============================================================================

/// Gravity per tick: 0.5 px/tick^2 = 32768
pub const GRAVITY: Fixed = 32768;

/// Flap impulse velocity: -8.0 px/tick = -8 * 65536
pub const FLAP_IMPULSE: Fixed = -524288;

/// Obstacle scroll speed: 2.0 px/tick = 2 * 65536
pub const SCROLL_SPEED: Fixed = 131072;

/// Avatar horizontal position, fixed for the whole session (pixels)
pub const BIRD_SPAWN_X: i32 = 100;

/// Pipe segment width (pixels)
pub const PIPE_WIDTH: i32 = 52;

/// Vertical gap between the two segments of a pair (pixels)
pub const PIPE_GAP: i32 = 180;

/// Minimum top-segment height; also the random roll offset (pixels)
pub const PIPE_MIN_TOP: i32 = 40;

/// Horizontal spacing scale: spacing = SPACING_SCALE * height / width
pub const SPACING_SCALE: i32 = 200;

/// Lower clamp for horizontal spacing (pixels)
pub const SPACING_MIN: i32 = 150;

/// Upper clamp for horizontal spacing (pixels)
pub const SPACING_MAX: i32 = 500;

/// Distance past the viewport edge before out-of-bounds triggers (pixels)
pub const BOUNDS_MARGIN: i32 = 100;

// =============================================================================
// CORE OPERATIONS (All deterministic, wrapping semantics)
// =============================================================================

/// Convert a compile-time float to fixed-point.
///
/// # Warning
/// Only use at compile-time or initialization. NEVER in the tick loop.
///
/// # Example
/// ```
/// use skyhop::core::fixed::{to_fixed, FIXED_ONE};
/// const MY_VALUE: i32 = to_fixed(2.5);
/// assert_eq!(MY_VALUE, FIXED_ONE * 2 + FIXED_ONE / 2);
/// ```
#[inline]
pub const fn to_fixed(f: f64) -> Fixed {
    (f * (FIXED_ONE as f64)) as Fixed
}

/// Convert fixed-point to float for display/rendering.
///
/// Never feed the result back into simulation state.
#[inline]
pub fn from_fixed(f: Fixed) -> f32 {
    (f as f32) / (FIXED_ONE as f32)
}

/// Convert an integer pixel count to fixed-point.
#[inline]
pub const fn int_to_fixed(i: i32) -> Fixed {
    i << FIXED_SCALE
}

/// Truncate fixed-point to integer pixels (round toward negative infinity).
#[inline]
pub const fn fixed_to_int(f: Fixed) -> i32 {
    f >> FIXED_SCALE
}

/// Multiply two fixed-point numbers.
///
/// Uses i64 intermediate to avoid overflow, truncates back to Q16.16.
#[inline]
pub const fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    (((a as i64) * (b as i64)) >> FIXED_SCALE) as Fixed
}

/// Clamp a fixed-point value to [min, max].
#[inline]
pub const fn fixed_clamp(v: Fixed, min: Fixed, max: Fixed) -> Fixed {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_round_trip() {
        assert_eq!(to_fixed(1.0), FIXED_ONE);
        assert_eq!(to_fixed(0.5), FIXED_HALF);
        assert_eq!(to_fixed(-8.0), FLAP_IMPULSE);
        assert_eq!(to_fixed(2.0), SCROLL_SPEED);

        assert!((from_fixed(to_fixed(3.25)) - 3.25).abs() < 1e-4);
        assert!((from_fixed(to_fixed(-0.5)) + 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(int_to_fixed(52), 52 * FIXED_ONE);
        assert_eq!(fixed_to_int(int_to_fixed(180)), 180);

        // Truncation is floor, not round
        assert_eq!(fixed_to_int(FIXED_ONE + FIXED_HALF), 1);
        assert_eq!(fixed_to_int(-FIXED_HALF), -1);
    }

    #[test]
    fn test_fixed_mul() {
        assert_eq!(fixed_mul(to_fixed(2.0), to_fixed(3.0)), to_fixed(6.0));
        assert_eq!(fixed_mul(to_fixed(0.5), to_fixed(0.5)), to_fixed(0.25));
        assert_eq!(fixed_mul(to_fixed(-2.0), to_fixed(2.0)), to_fixed(-4.0));

        // Parallax factor application stays exact for powers of two
        assert_eq!(fixed_mul(SCROLL_SPEED, to_fixed(0.25)), FIXED_HALF);
    }

    #[test]
    fn test_fixed_clamp() {
        let min = int_to_fixed(SPACING_MIN);
        let max = int_to_fixed(SPACING_MAX);

        assert_eq!(fixed_clamp(int_to_fixed(100), min, max), min);
        assert_eq!(fixed_clamp(int_to_fixed(700), min, max), max);
        assert_eq!(fixed_clamp(int_to_fixed(300), min, max), int_to_fixed(300));
    }

    #[test]
    fn test_gravity_integration_magnitudes() {
        // One second of free fall from rest: v = 30 px/tick, well inside range
        let mut v: Fixed = 0;
        for _ in 0..60 {
            v += GRAVITY;
        }
        assert_eq!(v, to_fixed(30.0));
    }
}
