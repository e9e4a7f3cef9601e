//! Engine Facade
//!
//! One `GameEngine` instance owns a complete session: the simulation
//! state, the injected configuration, and the best-score store. Hosts
//! drive it with exactly four calls - advance, activate, resize,
//! snapshot - and never reach into the state directly.

use tracing::info;

use crate::game::config::{ConfigError, EngineConfig};
use crate::game::snapshot::{render_snapshot, RenderSnapshot};
use crate::game::state::GameState;
use crate::game::tick::{advance, handle_activate, TickResult};
use crate::host::store::ScoreStore;

/// A complete game session engine.
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Create a fresh session in WAIT phase.
    ///
    /// Validates the configuration and primes the in-memory best score
    /// from the store. The store is never written here - only a beaten
    /// best writes back.
    pub fn new(
        config: EngineConfig,
        rng_seed: u64,
        store: Box<dyn ScoreStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = GameState::new(&config, rng_seed);
        state.best_score = store.read();

        info!(
            width = config.viewport_width,
            height = config.viewport_height,
            best = state.best_score,
            rng_seed,
            "engine initialized"
        );

        Ok(Self {
            config,
            state,
            store,
        })
    }

    /// Advance the session by exactly one tick.
    ///
    /// The contract is the side effects on owned state; the returned
    /// `TickResult` is observational (events, ended flag).
    pub fn advance_frame(&mut self) -> TickResult {
        advance(&mut self.state, &self.config, &mut *self.store)
    }

    /// Feed one activate signal (tap/click) into the session.
    pub fn handle_activate_signal(&mut self) {
        handle_activate(&mut self.state, &self.config);
    }

    /// Update the viewport bounds used by physics and spawning.
    ///
    /// Rejects dimensions the obstacle layout cannot fit; on error the
    /// previous viewport stays in effect.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        let mut updated = self.config.clone();
        updated.viewport_width = width;
        updated.viewport_height = height;
        updated.validate()?;

        info!(width, height, "viewport resized");
        self.config = updated;
        Ok(())
    }

    /// Read-only view of the current frame for the rendering
    /// collaborator.
    pub fn render_snapshot(&self) -> RenderSnapshot {
        render_snapshot(&self.state, &self.config)
    }

    /// Direct read access to the simulation state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::int_to_fixed;
    use crate::game::events::GameEventData;
    use crate::game::pipe::horizontal_spacing;
    use crate::game::state::{GamePhase, PipePair};
    use crate::host::store::InMemoryScoreStore;

    fn engine_with_best(best: u32) -> GameEngine {
        GameEngine::new(
            EngineConfig::with_viewport(800, 600),
            42,
            Box::new(InMemoryScoreStore::with_best(best)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_reads_persisted_best() {
        let engine = engine_with_best(17);

        assert_eq!(engine.state().phase, GamePhase::Wait);
        assert_eq!(engine.state().best_score, 17);
        assert_eq!(engine.render_snapshot().best_score, 17);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result = GameEngine::new(
            EngineConfig::with_viewport(800, 100),
            42,
            Box::new(InMemoryScoreStore::new()),
        );
        assert!(matches!(result, Err(ConfigError::GapTooLarge { .. })));
    }

    #[test]
    fn test_resize_validates_and_applies() {
        let mut engine = engine_with_best(0);

        // Portrait window spreads pairs out
        engine.handle_resize(600, 1800).unwrap();
        assert_eq!(engine.config().viewport_height, 1800);
        assert_eq!(horizontal_spacing(engine.config()), 500);

        // Too small: rejected, previous viewport kept
        assert!(engine.handle_resize(600, 50).is_err());
        assert_eq!(engine.config().viewport_height, 1800);
    }

    #[test]
    fn test_full_session_lifecycle() {
        let mut engine = engine_with_best(0);

        // WAIT: frames are inert
        engine.advance_frame();
        assert_eq!(engine.state().tick, 0);

        // Activate starts the session
        engine.handle_activate_signal();
        assert_eq!(engine.state().phase, GamePhase::Playing);

        // Flap occasionally, fall to the floor eventually
        let mut ended = false;
        for t in 0..600 {
            if t % 40 == 0 {
                engine.handle_activate_signal();
            }
            if engine.advance_frame().ended {
                ended = true;
                break;
            }
        }
        assert!(ended, "unpiloted session must reach GAME_OVER");
        assert_eq!(engine.state().phase, GamePhase::GameOver);

        // Activate resets back to WAIT with a zeroed session
        engine.handle_activate_signal();
        assert_eq!(engine.state().phase, GamePhase::Wait);
        assert_eq!(engine.state().score, 0);
        assert!(engine.state().pipes.is_empty());
    }

    #[test]
    fn test_best_score_written_through_engine() {
        let mut engine = engine_with_best(0);
        engine.handle_activate_signal();

        // Hand the session a pair that is already passed
        engine
            .state
            .pipes
            .push(PipePair::new(1, int_to_fixed(10), 100, 320, 600));
        engine.state.pairs_spawned = 1;

        let result = engine.advance_frame();
        let scored = result
            .events
            .iter()
            .any(|e| matches!(e.data, GameEventData::PipeScored { order: 1, .. }));

        assert!(scored);
        assert_eq!(engine.state().best_score, 1);
        assert_eq!(engine.store.read(), 1);
    }
}
