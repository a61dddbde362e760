pub mod app_config;
pub mod backend;
pub mod codec;
pub mod events;
pub mod file;
pub mod kv;
pub mod memory;

pub use app_config::{BusinessRules, Config, StorageBackend, StorageConfig};
pub use backend::LocalStore;
pub use events::{ChangeNotifier, Subscription};
pub use file::FileStore;
pub use kv::{KeyValueStore, StoreError};
pub use memory::MemoryStore;
