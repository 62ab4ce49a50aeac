//! Persistence of the sequence state between runs.
//!
//! The engine treats every failure here as "no prior state": a store only
//! reports what went wrong, the caller decides to carry on in memory.

pub mod file;
#[cfg(test)]
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileStateStore;
#[cfg(test)]
pub use memory::MemoryStateStore;

/// Persistence failures. None of them is fatal.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read state: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write state: {0}")]
    Write(#[source] std::io::Error),

    #[error("stored state is malformed: {0}")]
    Malformed(String),

    #[error("state storage unavailable: {0}")]
    Unavailable(String),
}

/// The stored blob. Checked against the current collection before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Fingerprint of the collection the order was built for
    pub fingerprint: String,
    pub order: Vec<usize>,
    pub cursor: usize,
    /// Index of the quote last presented
    #[serde(default)]
    pub current: Option<usize>,
}

/// Durable key-value slot for [`PersistedState`].
pub trait StateStore {
    /// `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<PersistedState>, PersistError>;

    fn save(&mut self, state: &PersistedState) -> Result<(), PersistError>;

    /// Forget the stored state.
    fn clear(&mut self) -> Result<(), PersistError>;

    /// Human-readable location, for status output.
    fn describe(&self) -> String;
}
