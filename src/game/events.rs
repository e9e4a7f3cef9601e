//! Game Events
//!
//! Events generated during simulation, consumed by hosts for HUD/audio
//! hooks and by tests to assert exact simulation traces.

use serde::{Deserialize, Serialize};

use crate::game::state::PipeHalf;

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Avatar left the playfield past the bounds margin.
    OutOfBounds,
    /// Avatar struck an obstacle segment.
    PipeCollision {
        /// Order index of the pair that was hit
        order: u32,
        /// Which segment of the pair
        half: PipeHalf,
    },
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Session left WAIT and began playing.
    SessionStarted,

    /// A new obstacle pair entered the playfield.
    PipeSpawned {
        /// Order index shared by both segments
        order: u32,
        /// Top-segment height (pixels)
        top_height: i32,
        /// Bottom-segment height (pixels)
        bottom_height: i32,
    },

    /// Avatar cleared an obstacle pair.
    PipeScored {
        /// Order index of the cleared pair
        order: u32,
        /// Session score after the increment
        score: u32,
    },

    /// Session score exceeded the persisted best.
    BestScoreRaised {
        /// New best score
        best: u32,
    },

    /// Session reached GAME_OVER.
    SessionEnded {
        /// What ended it
        cause: GameOverCause,
        /// Final session score
        score: u32,
    },

    /// GAME_OVER session was reset back to WAIT.
    SessionReset,
}

/// A game event with its tick of occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create session started event.
    pub fn session_started(tick: u32) -> Self {
        Self::new(tick, GameEventData::SessionStarted)
    }

    /// Create pipe spawned event.
    pub fn pipe_spawned(tick: u32, order: u32, top_height: i32, bottom_height: i32) -> Self {
        Self::new(
            tick,
            GameEventData::PipeSpawned {
                order,
                top_height,
                bottom_height,
            },
        )
    }

    /// Create pipe scored event.
    pub fn pipe_scored(tick: u32, order: u32, score: u32) -> Self {
        Self::new(tick, GameEventData::PipeScored { order, score })
    }

    /// Create best score raised event.
    pub fn best_score_raised(tick: u32, best: u32) -> Self {
        Self::new(tick, GameEventData::BestScoreRaised { best })
    }

    /// Create session ended event.
    pub fn session_ended(tick: u32, cause: GameOverCause, score: u32) -> Self {
        Self::new(tick, GameEventData::SessionEnded { cause, score })
    }

    /// Create session reset event.
    pub fn session_reset(tick: u32) -> Self {
        Self::new(tick, GameEventData::SessionReset)
    }
}
