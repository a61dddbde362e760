use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::kv::{KeyValueStore, StoreError};

/// Write-through storage backend persisting the whole key space as one JSON
/// file. Clones share the same file and in-memory view of it.
#[derive(Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    /// A corrupt or unreadable file degrades to an empty key space.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                key: path.display().to_string(),
                source,
            })?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("Discarding corrupt storage file {}: {}", path.display(), err);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path: Arc::new(path),
            inner: Arc::new(Mutex::new(entries)),
        })
    }

    /// Opens the store at its default location under the platform data
    /// directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no platform data directory".to_string()))?;
        Self::open(base.join("pilates-core").join("ledgers.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(entries)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        fs::write(self.path.as_ref(), encoded).map_err(|source| StoreError::Io {
            key: self.path.display().to_string(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().ok()?;
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable("file store mutex poisoned".to_string()))?;
        inner.insert(key.to_string(), value.to_string());
        self.persist(&inner)
    }
}
