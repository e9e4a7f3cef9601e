//! Best-Score Persistence
//!
//! The engine's only durable state is the best score, kept behind the
//! `ScoreStore` trait so the core never touches a storage API directly.
//! Store failures are non-fatal: the simulation keeps its in-memory best
//! and carries on.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

/// A persistence failure from a score store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("score store I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Durable best-score storage.
///
/// `read` is called once at engine construction; `write` on every best
/// score increase. Implementations must never lower the stored value on
/// their own - the engine is the only writer.
pub trait ScoreStore {
    /// Read the persisted best score; 0 when nothing is stored yet.
    fn read(&self) -> u32;

    /// Persist a new best score.
    fn write(&mut self, best: u32) -> Result<(), StoreError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Volatile store for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScoreStore {
    best: u32,
}

impl InMemoryScoreStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-seeded best score.
    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn read(&self) -> u32 {
        self.best
    }

    fn write(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = best;
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Best score persisted as decimal text in a single file.
///
/// Missing or unparseable contents read as 0, so a corrupt file degrades
/// to a fresh high-score table rather than an error.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or_else(|_| {
                warn!(path = %self.path.display(), "ignoring unparseable best-score file");
                0
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read best-score file");
                0
            }
        }
    }

    fn write(&mut self, best: u32) -> Result<(), StoreError> {
        fs::write(&self.path, format!("{best}\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let mut store = InMemoryScoreStore::new();
        assert_eq!(store.read(), 0);

        store.write(7).unwrap();
        assert_eq!(store.read(), 7);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join("skyhop-store-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("best_score");
        let _ = fs::remove_file(&path);

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.read(), 0, "missing file reads as zero");

        store.write(12).unwrap();
        assert_eq!(store.read(), 12);

        // Survives a fresh handle (process-restart stand-in)
        let reopened = FileScoreStore::new(&path);
        assert_eq!(reopened.read(), 12);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_garbage() {
        let dir = std::env::temp_dir().join("skyhop-store-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage_score");
        fs::write(&path, "not a number").unwrap();

        let store = FileScoreStore::new(&path);
        assert_eq!(store.read(), 0);

        let _ = fs::remove_file(&path);
    }
}
