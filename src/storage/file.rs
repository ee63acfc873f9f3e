//! File-backed and in-memory stores

use super::{GameStore, PersistedRecord, StorageError};
use directories::ProjectDirs;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory for saved games and logs
#[must_use]
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "hourly_wordle").map_or_else(
        || PathBuf::from(".hourly_wordle"),
        |dirs| dirs.data_local_dir().to_path_buf(),
    )
}

/// All records in one JSON object, keyed by record key
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `games.json` inside the default data directory
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(default_data_dir().join("games.json"))
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Map<String, Value> {
        let Ok(bytes) = fs::read(&self.path) else {
            return Map::new();
        };
        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "save file unreadable, starting fresh");
                Map::new()
            }
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(map)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<PersistedRecord> {
        let value = self.read_all().remove(key)?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key, error = %e, "saved game unreadable, ignoring it");
                None
            }
        }
    }

    fn save(&mut self, key: &str, record: &PersistedRecord) -> Result<(), StorageError> {
        let mut map = self.read_all();
        map.insert(key.to_owned(), serde_json::to_value(record)?);
        self.write_all(&map)
    }
}

/// Store that keeps records for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, PersistedRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, key: &str) -> Option<PersistedRecord> {
        self.records.get(key).cloned()
    }

    fn save(&mut self, key: &str, record: &PersistedRecord) -> Result<(), StorageError> {
        self.records.insert(key.to_owned(), record.clone());
        Ok(())
    }
}
