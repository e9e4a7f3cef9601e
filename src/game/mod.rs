//! Game Logic Module
//!
//! All simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `config`: injected tuning constants and validation
//! - `state`: session state, avatar, obstacles, decor
//! - `tick`: per-frame advance and activate-signal routing
//! - `collision`: avatar-vs-obstacle and bounds checks
//! - `pipe`: obstacle spawning, scrolling, pruning
//! - `score`: pass detection, dedup, best-score maintenance
//! - `snapshot`: read-only render projection
//! - `events`: game events for hosts and replay

pub mod collision;
pub mod config;
pub mod events;
pub mod pipe;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

// Re-export key types
pub use config::{ConfigError, EngineConfig};
pub use events::{GameEvent, GameEventData, GameOverCause};
pub use snapshot::RenderSnapshot;
pub use state::{BirdState, GamePhase, GameState, PipeHalf, PipePair};
pub use tick::TickResult;
