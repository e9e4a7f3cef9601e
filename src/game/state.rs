//! Game State Definitions
//!
//! All state for one game session: avatar, obstacle set, decor, score and
//! the WAIT/PLAYING/GAME_OVER machine. Uses BTreeSet for deterministic
//! iteration order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::fixed::{int_to_fixed, to_fixed, Fixed};
use crate::core::rng::DeterministicRng;
use crate::game::config::EngineConfig;
use crate::game::events::{GameEvent, GameOverCause};

// =============================================================================
// SESSION PHASE
// =============================================================================

/// Current phase of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Waiting for the first activate signal; avatar idle, no spawning,
    /// no scoring.
    #[default]
    Wait,
    /// Physics, spawning and scoring active.
    Playing,
    /// Terminal until the next activate signal resets the session.
    GameOver,
}

// =============================================================================
// AVATAR
// =============================================================================

/// State of the player-controlled avatar.
///
/// Horizontal position never changes during a session; the world scrolls
/// past instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirdState {
    /// Horizontal position (Fixed, constant per session)
    pub x: Fixed,
    /// Vertical position (Fixed)
    pub y: Fixed,
    /// Vertical velocity (Fixed, px/tick; positive is down)
    pub velocity: Fixed,
}

impl BirdState {
    /// Create the avatar at its spawn point for the given viewport.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            x: int_to_fixed(config.bird_x),
            y: int_to_fixed(config.viewport_height as i32 / 2),
            velocity: 0,
        }
    }

    /// Apply the upward flap impulse. The impulse replaces the current
    /// velocity; downward speed from falling is discarded.
    #[inline]
    pub fn flap(&mut self, impulse: Fixed) {
        self.velocity = impulse;
    }

    /// One integration step: velocity accumulates gravity, position
    /// integrates velocity. No terminal velocity clamp.
    #[inline]
    pub fn integrate(&mut self, gravity: Fixed) {
        self.velocity = self.velocity.wrapping_add(gravity);
        self.y = self.y.wrapping_add(self.velocity);
    }
}

// =============================================================================
// OBSTACLES
// =============================================================================

/// Which half of a pair a segment is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeHalf {
    /// Hangs from the viewport top edge
    Top,
    /// Stands on the viewport bottom edge
    Bottom,
}

/// One obstacle segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeSegment {
    /// Which half of the pair this is
    pub half: PipeHalf,
    /// Top edge of the segment (Fixed)
    pub y: Fixed,
    /// Segment height (Fixed)
    pub height: Fixed,
}

/// A pair of obstacle segments sharing one order index and one horizontal
/// position; they move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipePair {
    /// Order index, strictly increasing across a session; the scoring unit
    pub order: u32,
    /// Shared horizontal position (Fixed)
    pub x: Fixed,
    /// Upper segment
    pub top: PipeSegment,
    /// Lower segment
    pub bottom: PipeSegment,
}

impl PipePair {
    /// Build a pair from integer pixel heights.
    ///
    /// Invariant at spawn: `top_height + gap + bottom_height` equals the
    /// viewport height (bottom_height is pre-clamped by the spawner).
    pub fn new(
        order: u32,
        x: Fixed,
        top_height: i32,
        bottom_height: i32,
        viewport_height: u32,
    ) -> Self {
        Self {
            order,
            x,
            top: PipeSegment {
                half: PipeHalf::Top,
                y: 0,
                height: int_to_fixed(top_height),
            },
            bottom: PipeSegment {
                half: PipeHalf::Bottom,
                y: int_to_fixed(viewport_height as i32 - bottom_height),
                height: int_to_fixed(bottom_height),
            },
        }
    }

    /// Right edge of both segments (Fixed).
    #[inline]
    pub fn right_edge(&self, pipe_width: i32) -> Fixed {
        self.x + int_to_fixed(pipe_width)
    }
}

// =============================================================================
// DECOR (never collision-relevant)
// =============================================================================

/// A decorative cloud with a parallax scroll factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudState {
    /// Horizontal position (Fixed)
    pub x: Fixed,
    /// Vertical position (Fixed)
    pub y: Fixed,
    /// Fraction of scroll speed this cloud moves at (Fixed)
    pub parallax: Fixed,
}

/// Seed layout of the cloud layer: (x, y, parallax factor).
const CLOUD_SEEDS: [(i32, i32, Fixed); 4] = [
    (100, 30, to_fixed(0.1)),
    (300, 60, to_fixed(0.4)),
    (500, 20, to_fixed(0.4)),
    (700, 30, to_fixed(0.1)),
];

fn seed_clouds() -> Vec<CloudState> {
    CLOUD_SEEDS
        .iter()
        .map(|&(x, y, parallax)| CloudState {
            x: int_to_fixed(x),
            y: int_to_fixed(y),
            parallax,
        })
        .collect()
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of a game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Current tick since session start (or last reset)
    pub tick: u32,

    /// Current phase
    pub phase: GamePhase,

    /// RNG seed (for replay)
    pub rng_seed: u64,

    /// Deterministic RNG state
    #[serde(skip)]
    pub rng: DeterministicRng,

    /// The avatar
    pub bird: BirdState,

    /// Live obstacle pairs, oldest first
    pub pipes: Vec<PipePair>,

    /// Order indices already credited to the score (BTreeSet for
    /// deterministic iteration)
    pub passed: BTreeSet<u32>,

    /// Pairs spawned this session; the next pair gets this + 1 as order
    pub pairs_spawned: u32,

    /// Session score
    pub score: u32,

    /// Best score observed across sessions (mirrors the persisted store)
    pub best_score: u32,

    /// Decorative cloud layer
    pub clouds: Vec<CloudState>,

    /// Decorative ground scroll offset (Fixed, wraps at viewport width)
    pub ground_offset: Fixed,

    /// Events generated this tick (cleared each tick)
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in WAIT phase.
    pub fn new(config: &EngineConfig, rng_seed: u64) -> Self {
        Self {
            tick: 0,
            phase: GamePhase::Wait,
            rng_seed,
            rng: DeterministicRng::new(rng_seed),
            bird: BirdState::new(config),
            pipes: Vec::new(),
            passed: BTreeSet::new(),
            pairs_spawned: 0,
            score: 0,
            best_score: 0,
            clouds: seed_clouds(),
            ground_offset: 0,
            pending_events: Vec::new(),
        }
    }

    /// The most recently spawned pair, if any.
    #[inline]
    pub fn newest_pair(&self) -> Option<&PipePair> {
        self.pipes.last()
    }

    /// Is the session in the PLAYING phase?
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// WAIT -> PLAYING transition.
    ///
    /// Leaves the avatar untouched; the first flap comes from a later
    /// activate signal.
    pub fn begin_session(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::Wait);
        self.phase = GamePhase::Playing;
        let tick = self.tick;
        self.push_event(GameEvent::session_started(tick));
    }

    /// PLAYING -> GAME_OVER transition.
    ///
    /// Clears the passed set; the live obstacle set stays for the
    /// game-over screen and is cleared by the reset.
    pub fn end_session(&mut self, cause: GameOverCause) {
        debug_assert_eq!(self.phase, GamePhase::Playing);
        self.phase = GamePhase::GameOver;
        self.passed.clear();
        let (tick, score) = (self.tick, self.score);
        self.push_event(GameEvent::session_ended(tick, cause, score));
    }

    /// GAME_OVER -> WAIT transition: the full reset.
    ///
    /// Avatar back at spawn, score zeroed, obstacles and spawn cursor
    /// cleared. The persisted best and the RNG sequence carry over.
    pub fn reset_session(&mut self, config: &EngineConfig) {
        debug_assert_eq!(self.phase, GamePhase::GameOver);
        let tick = self.tick;
        self.push_event(GameEvent::session_reset(tick));

        self.phase = GamePhase::Wait;
        self.tick = 0;
        self.bird = BirdState::new(config);
        self.pipes.clear();
        self.passed.clear();
        self.pairs_spawned = 0;
        self.score = 0;
        self.ground_offset = 0;
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
