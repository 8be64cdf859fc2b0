use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Named-key JSON persistence for the thin state containers.
///
/// Each key maps to one JSON file under the storage directory. There is no
/// schema versioning; a value that fails to deserialize is treated as absent.
pub struct KeyValueStorage {
    dir: PathBuf,
}

impl KeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load the value stored under `key`, if any.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let bytes = fs::read(&path).ok()?;

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable state file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create storage dir {}", self.dir.display()))?;

        let path = self.path_for(key);
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write state file {}", path.display()))?;

        Ok(())
    }
}
