//! Store configuration.

use std::path::PathBuf;

/// Default persisted file, relative to the working directory.
pub const DEFAULT_FILE: &str = "inventory.json";

/// Default threshold below which an item counts as low.
pub const DEFAULT_LOW_THRESHOLD: i64 = 5;

/// Environment variable overriding [`StoreConfig::path`].
pub const FILE_ENV: &str = "STOCKROOM_FILE";

/// Environment variable overriding [`StoreConfig::low_threshold`].
pub const LOW_THRESHOLD_ENV: &str = "STOCKROOM_LOW_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// File used by `load()` / `save()`.
    pub path: PathBuf,
    /// Threshold used by `list_low_default()`.
    pub low_threshold: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl StoreConfig {
    /// Build from `STOCKROOM_FILE` / `STOCKROOM_LOW_THRESHOLD`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(v) => config.low_threshold = v,
                Err(_) => tracing::warn!(
                    "{LOW_THRESHOLD_ENV}={raw:?} is not an integer; using {DEFAULT_LOW_THRESHOLD}"
                ),
            }
        }

        config
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_low_threshold(mut self, threshold: i64) -> Self {
        self.low_threshold = threshold;
        self
    }
}
