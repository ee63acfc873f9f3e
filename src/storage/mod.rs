//! Persistence of in-progress and finished games
//!
//! One record per mode and seed key, stored as a flat key/value JSON blob.
//! Unreadable records are treated as absent so a damaged file never blocks play.

mod file;
mod record;

pub use file::{JsonFileStore, MemoryStore, default_data_dir};
pub use record::{PersistedRecord, record_key};

use thiserror::Error;

/// Errors raised while writing records
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Keyed store for game records
pub trait GameStore {
    /// Load the record under `key`, or `None` if missing or unreadable
    fn load(&self, key: &str) -> Option<PersistedRecord>;

    /// Write `record` under `key`, replacing any previous value
    fn save(&mut self, key: &str, record: &PersistedRecord) -> Result<(), StorageError>;
}
