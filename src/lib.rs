//! # Skyhop Game Core
//!
//! Deterministic simulation core for a side-scrolling arcade game: a
//! bird avatar threads procedurally spawned pipe pairs, scored per pair
//! passed, ending on collision. Rendering, assets and persistence are
//! external collaborators - this crate owns only the per-frame state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SKYHOP CORE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point arithmetic             │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── config.rs   - Injected tuning + validation              │
//! │  ├── state.rs    - Avatar, obstacles, decor, phase machine   │
//! │  ├── tick.rs     - Per-frame advance, activate routing       │
//! │  ├── collision.rs- Segment and bounds checks                 │
//! │  ├── pipe.rs     - Spawning, scrolling, pruning              │
//! │  ├── score.rs    - Pass detection and best-score upkeep      │
//! │  ├── snapshot.rs - Read-only render projection               │
//! │  └── events.rs   - Per-tick event stream                     │
//! │                                                              │
//! │  engine.rs       - Facade: advance/activate/resize/snapshot  │
//! │                                                              │
//! │  host/           - Collaborators (non-deterministic)         │
//! │  ├── store.rs    - Best-score persistence trait + impls      │
//! │  └── clock.rs    - Fallback fixed-interval frame pacing      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - No floating-point arithmetic in game logic (floats appear only in
//!   render snapshots, and never flow back)
//! - Ordered collections only (Vec in spawn order, BTreeSet)
//! - No system time dependencies
//! - All randomness from seeded Xorshift128+
//!
//! Given the same configuration, RNG seed and activate-signal schedule,
//! two sessions produce **identical states and event streams** on any
//! platform. `game::tick::replay_session` rebuilds a session from its
//! recorded schedule.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod engine;
pub mod game;
pub mod host;

// Re-export commonly used types
pub use crate::core::fixed::{Fixed, FIXED_HALF, FIXED_ONE, FIXED_SCALE};
pub use crate::core::rng::DeterministicRng;
pub use crate::engine::GameEngine;
pub use crate::game::config::{ConfigError, EngineConfig};
pub use crate::game::events::{GameEvent, GameEventData, GameOverCause};
pub use crate::game::snapshot::RenderSnapshot;
pub use crate::game::state::{GamePhase, GameState};
pub use crate::game::tick::TickResult;
pub use crate::host::clock::{FixedStepClock, FrameClock};
pub use crate::host::store::{FileScoreStore, InMemoryScoreStore, ScoreStore, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display/simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
