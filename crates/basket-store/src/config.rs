//! # Store Configuration
//!
//! Data-directory configuration for the snapshot store, loaded from
//! environment variables.

use std::path::PathBuf;

/// Snapshot store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding persisted snapshots
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `BASKET_DATA_DIR`, defaulting to `./data`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = std::env::var("BASKET_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self { data_dir }
    }

    /// Create config with an explicit directory (for testing)
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir() {
        let config = StoreConfig::new("/tmp/basket-test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/basket-test"));
    }
}
