//! Collision Detection
//!
//! Deterministic avatar-vs-obstacle and avatar-vs-bounds checks. All
//! comparisons are exclusive; touching an edge exactly is not a hit.

use crate::core::fixed::{int_to_fixed, Fixed};
use crate::game::config::EngineConfig;
use crate::game::events::GameOverCause;
use crate::game::state::{BirdState, GameState, PipePair, PipeSegment};

/// Check whether the avatar overlaps one obstacle segment.
///
/// Horizontal span is `(x - width/2, x + width)`: the back edge extends
/// half a width left of the anchor, matching the rendered pipe lip.
#[inline]
pub fn segment_hit(bird: &BirdState, pair_x: Fixed, segment: &PipeSegment, pipe_width: i32) -> bool {
    let width = int_to_fixed(pipe_width);
    let half_width = width >> 1;

    bird.x > pair_x - half_width
        && bird.x < pair_x + width
        && bird.y > segment.y
        && bird.y < segment.y + segment.height
}

/// Check whether the avatar overlaps either segment of a pair.
///
/// Returns the segment that was hit, top checked first.
pub fn pair_hit(bird: &BirdState, pair: &PipePair, pipe_width: i32) -> Option<PipeSegment> {
    if segment_hit(bird, pair.x, &pair.top, pipe_width) {
        return Some(pair.top);
    }
    if segment_hit(bird, pair.x, &pair.bottom, pipe_width) {
        return Some(pair.bottom);
    }
    None
}

/// Check whether the avatar has left the playfield.
///
/// The playfield extends `margin` pixels past both vertical viewport
/// edges before a session ends.
#[inline]
pub fn out_of_bounds(bird: &BirdState, viewport_height: u32, margin: i32) -> bool {
    let lower = -int_to_fixed(margin);
    let upper = int_to_fixed(viewport_height as i32 + margin);

    bird.y < lower || bird.y > upper
}

/// Evaluate every session-ending condition for the current frame.
///
/// Bounds are checked before obstacles; pairs are swept oldest first.
/// Returns the first terminal cause found, or None.
pub fn check_bird_collision(state: &GameState, config: &EngineConfig) -> Option<GameOverCause> {
    if out_of_bounds(&state.bird, config.viewport_height, config.bounds_margin) {
        return Some(GameOverCause::OutOfBounds);
    }

    for pair in &state.pipes {
        if let Some(segment) = pair_hit(&state.bird, pair, config.pipe_width) {
            return Some(GameOverCause::PipeCollision {
                order: pair.order,
                half: segment.half,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::PipeHalf;

    fn bird_at(x: i32, y: i32) -> BirdState {
        BirdState {
            x: int_to_fixed(x),
            y: int_to_fixed(y),
            velocity: 0,
        }
    }

    #[test]
    fn test_segment_hit_reference_case() {
        // Avatar at (100, 50), top segment at x=90, width 52, y=0, height 60:
        // (100 > 90-26) && (100 < 90+52) && (50 > 0) && (50 < 60)
        let bird = bird_at(100, 50);
        let segment = PipeSegment {
            half: PipeHalf::Top,
            y: 0,
            height: int_to_fixed(60),
        };

        assert!(segment_hit(&bird, int_to_fixed(90), &segment, 52));
    }

    #[test]
    fn test_segment_edges_are_exclusive() {
        let segment = PipeSegment {
            half: PipeHalf::Top,
            y: 0,
            height: int_to_fixed(60),
        };
        let x = int_to_fixed(90);

        // Exactly on the right edge: 90 + 52 = 142, not inside
        assert!(!segment_hit(&bird_at(142, 50), x, &segment, 52));
        // Exactly on the back edge: 90 - 26 = 64, not inside
        assert!(!segment_hit(&bird_at(64, 50), x, &segment, 52));
        // Exactly on the segment top edge
        assert!(!segment_hit(&bird_at(100, 0), x, &segment, 52));
        // Exactly on the segment bottom edge
        assert!(!segment_hit(&bird_at(100, 60), x, &segment, 52));
        // Just inside all four
        assert!(segment_hit(&bird_at(100, 59), x, &segment, 52));
    }

    #[test]
    fn test_pair_hit_reports_half() {
        let pair = PipePair::new(3, int_to_fixed(90), 60, 360, 600);

        let top = pair_hit(&bird_at(100, 30), &pair, 52).unwrap();
        assert_eq!(top.half, PipeHalf::Top);

        let bottom = pair_hit(&bird_at(100, 500), &pair, 52).unwrap();
        assert_eq!(bottom.half, PipeHalf::Bottom);

        // Inside the gap: 60 < y < 240
        assert!(pair_hit(&bird_at(100, 150), &pair, 52).is_none());
    }

    #[test]
    fn test_out_of_bounds_margins() {
        // Viewport 600 tall, margin 100: playfield is (-100, 700)
        assert!(out_of_bounds(&bird_at(100, 750), 600, 100));
        assert!(out_of_bounds(&bird_at(100, -150), 600, 100));

        assert!(!out_of_bounds(&bird_at(100, 699), 600, 100));
        assert!(!out_of_bounds(&bird_at(100, -99), 600, 100));

        // Edges themselves are inside
        assert!(!out_of_bounds(&bird_at(100, 700), 600, 100));
        assert!(!out_of_bounds(&bird_at(100, -100), 600, 100));
    }

    #[test]
    fn test_check_bird_collision_prefers_bounds() {
        let config = EngineConfig::with_viewport(800, 600);
        let mut state = GameState::new(&config, 1);

        // Bird both out of bounds and inside a pipe: bounds wins
        state.bird = bird_at(100, 750);
        state
            .pipes
            .push(PipePair::new(1, int_to_fixed(90), 60, 360, 600));

        assert_eq!(
            check_bird_collision(&state, &config),
            Some(GameOverCause::OutOfBounds)
        );
    }

    #[test]
    fn test_check_bird_collision_reports_pair_order() {
        let config = EngineConfig::with_viewport(800, 600);
        let mut state = GameState::new(&config, 1);

        state.bird = bird_at(100, 30);
        state
            .pipes
            .push(PipePair::new(7, int_to_fixed(90), 60, 360, 600));

        assert_eq!(
            check_bird_collision(&state, &config),
            Some(GameOverCause::PipeCollision {
                order: 7,
                half: PipeHalf::Top
            })
        );
    }

    #[test]
    fn test_no_collision_in_open_air() {
        let config = EngineConfig::with_viewport(800, 600);
        let mut state = GameState::new(&config, 1);
        state
            .pipes
            .push(PipePair::new(1, int_to_fixed(600), 60, 360, 600));

        assert_eq!(check_bird_collision(&state, &config), None);
    }
}
