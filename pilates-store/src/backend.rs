use crate::app_config::{StorageBackend, StorageConfig};
use crate::file::FileStore;
use crate::kv::{KeyValueStore, StoreError};
use crate::memory::MemoryStore;

/// Storage backend selected at runtime from [`StorageConfig`].
#[derive(Clone)]
pub enum LocalStore {
    Memory(MemoryStore),
    File(FileStore),
}

impl StorageConfig {
    /// Opens the configured backend.
    pub fn open(&self) -> Result<LocalStore, StoreError> {
        match self.backend {
            StorageBackend::Memory => Ok(LocalStore::Memory(MemoryStore::new())),
            StorageBackend::File => {
                let store = match &self.path {
                    Some(path) => FileStore::open(path.clone())?,
                    None => FileStore::open_default()?,
                };
                Ok(LocalStore::File(store))
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            LocalStore::Memory(store) => store.get(key),
            LocalStore::File(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            LocalStore::Memory(store) => store.set(key, value),
            LocalStore::File(store) => store.set(key, value),
        }
    }
}
