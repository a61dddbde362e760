use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::{KeyValueStore, StoreError};

/// In-memory storage backend. Clones share one key space.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once keys plus values would exceed
    /// `capacity` bytes, the way a browser quota does.
    pub fn with_capacity(capacity: usize) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            inner.capacity = Some(capacity);
        }
        store
    }

    /// Bytes currently held across keys and values.
    pub fn used_bytes(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.entries.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().ok()?;
        inner.entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store mutex poisoned".to_string()))?;

        if let Some(capacity) = inner.capacity {
            let retained: usize = inner
                .entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let attempted = retained + key.len() + value.len();
            if attempted > capacity {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    attempted,
                    capacity,
                });
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("core_bookings", "[]").unwrap();
        assert_eq!(clone.get("core_bookings").as_deref(), Some("[]"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_quota_refuses_oversized_write() {
        let store = MemoryStore::with_capacity(10);

        store.set("k", "12345").unwrap();
        let err = store.set("other", "too large").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { .. }));

        // The refused key was never stored
        assert_eq!(store.get("other"), None);
        assert_eq!(store.used_bytes(), 6);
    }

    #[test]
    fn test_quota_allows_replacing_a_key_in_place() {
        let store = MemoryStore::with_capacity(10);

        store.set("k", "123456789").unwrap();
        // Replacing the same key is measured against the new value only
        store.set("k", "abcdefghi").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("abcdefghi"));
    }
}
