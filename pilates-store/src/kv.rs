use thiserror::Error;

/// Synchronous string-keyed storage port backing the ledgers.
///
/// Handles are cheap to clone and share their underlying key space, so two
/// ledgers opened over clones of the same store see each other's writes.
/// Reads never fail: a missing key is `None` and backends recover from
/// corrupt persisted state on their own. Writes surface typed failures.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Write-side storage failures. These propagate to the caller; there is no
/// retry policy.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage quota exceeded writing {key}: {attempted} bytes over a {capacity} byte budget")]
    QuotaExceeded {
        key: String,
        attempted: usize,
        capacity: usize,
    },

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to persist {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
