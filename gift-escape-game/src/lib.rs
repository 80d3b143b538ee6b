//! Gift Escape Core
//!
//! Platform-agnostic logic for the Gift Escape greeting card: personalization,
//! the three chapter puzzles, and the persisted stage/hint progress. No DOM or
//! browser dependencies live here.

pub mod config;
pub mod decor;
pub mod progress;
pub mod puzzles;

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

// Re-export commonly used types
pub use config::{ConfigKey, Configuration, OverrideSource, resolve};
pub use decor::{
    CONFETTI_LIFETIME_MS, ConfettiParticle, DEFAULT_BURST, FALL_TICK_MS, QR_SIZE, confetti_burst,
    placeholder_qr, seeded_rng,
};
pub use progress::{
    HINT_BUDGET, HINTS_KEY, Hint, ProgressController, ProgressEvent, ProgressState, STAGE_KEY,
    Stage, StageError, load_progress, save_progress,
};
pub use puzzles::{
    CipherPuzzle, LightsOut, NeighborRule, PuzzleId, TOOLS, Tool, ToolSelection, caesar_shift,
};

/// Trait for abstracting the progress store.
/// Platform-specific implementations should provide this
pub trait ProgressStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn read_entry(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write_entry(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn remove_entry(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-memory store. Clones share the same entries, so a second controller
/// built from a clone behaves like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seed a raw value, bypassing the controller.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ProgressStorage for MemoryStorage {
    type Error = Infallible;

    fn read_entry(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(key, value);
        Ok(())
    }

    fn remove_entry(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Everything one visit needs: the resolved personalization and the
/// progress controller bound to a store.
#[derive(Debug, Clone)]
pub struct GiftSession<S>
where
    S: ProgressStorage,
{
    config: Configuration,
    progress: ProgressController<S>,
}

impl<S> GiftSession<S>
where
    S: ProgressStorage,
{
    /// Resolve `overrides` and load progress from `storage`.
    pub fn open<O: OverrideSource + ?Sized>(storage: S, overrides: &O) -> Self {
        Self {
            config: resolve(overrides),
            progress: ProgressController::new(storage),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub const fn progress(&self) -> &ProgressController<S> {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressController<S> {
        &mut self.progress
    }

    #[must_use]
    pub fn into_parts(self) -> (Configuration, ProgressController<S>) {
        (self.config, self.progress)
    }
}
