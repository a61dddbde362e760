use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Application configuration. Every field has a default, so hosts without a
/// `config/` directory still get a working memory-backed setup.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// File backend location; the platform data directory when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BusinessRules {
    /// Sessions starting within this many hours can no longer be cancelled
    /// free of charge.
    pub cancellation_cutoff_hours: i64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            cancellation_cutoff_hours: 24,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of PILATES)
            // Eg.. `PILATES__STORAGE__BACKEND=file` would set `storage.backend`
            .add_source(config::Environment::with_prefix("PILATES").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
