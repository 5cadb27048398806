//! Thread-safe engine handle.

use super::action::MoveError;
use super::engine::{EngineConfig, GameEngine, GameState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Engine shared between callers.
///
/// `apply_move` is a read-modify-write over the board, so every call
/// takes the lock for its whole duration. Clones share one engine.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine<const N: usize> {
    inner: Arc<Mutex<GameEngine<N>>>,
}

impl<const N: usize> SharedEngine<N> {
    /// Wraps a fresh engine built from `config`.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        Self::from_engine(GameEngine::with_config(config))
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: GameEngine<N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // The engine never panics halfway through a mutation, so a poisoned
    // lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, GameEngine<N>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a move under the lock.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<(), MoveError> {
        self.lock().apply_move(row, col)
    }

    /// Resets under the lock.
    pub fn reset(&self) {
        debug!("Resetting shared engine");
        self.lock().reset();
    }

    /// Returns an owned copy of the state.
    pub fn snapshot(&self) -> GameState<N> {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access, for multi-step reads.
    pub fn with<R>(&self, f: impl FnOnce(&GameEngine<N>) -> R) -> R {
        f(&self.lock())
    }
}
