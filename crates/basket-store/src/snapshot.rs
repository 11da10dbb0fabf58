//! # Snapshot Store
//!
//! File-backed [`CartStore`]: one JSON file holding the serialized line
//! item array under a fixed, versionless key name. There is no schema
//! migration logic; a shape change requires a key rename or defensive
//! parsing at the call site.

use crate::config::StoreConfig;
use basket_core::{CartStore, LineItem, StoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed key the snapshot is stored under
pub const CART_KEY: &str = "cart";

/// JSON-file cart store rooted in a configured data directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store writing to `<data_dir>/cart.json`
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.data_dir.join(format!("{CART_KEY}.json")),
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for SnapshotStore {
    fn load(&self) -> Result<Vec<LineItem>, StoreError> {
        if !self.path.exists() {
            debug!("no cart snapshot at {}", self.path.display());
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Read(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }

        let raw =
            serde_json::to_string(items).map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::{Currency, Price, Product};

    fn temp_store() -> SnapshotStore {
        let dir = std::env::temp_dir().join(format!("basket-store-{}", uuid::Uuid::new_v4()));
        SnapshotStore::new(&StoreConfig::new(dir))
    }

    fn items() -> Vec<LineItem> {
        let product = Product::new(1, "Tee", "Roadster", Price::from_minor(599, Currency::INR))
            .with_image("https://cdn.example.com/tee.jpg");
        vec![
            LineItem::from_product(&product, "M", "Red", 2),
            LineItem::from_product(&product, "L", "Blue", 1),
        ]
    }

    #[test]
    fn test_missing_snapshot_loads_empty() {
        let store = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store();
        let items = items();

        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let store = temp_store();
        store.save(&items()).unwrap();
        store.save(&items()[..1]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = temp_store();
        store.save(&items()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_cart_sessions_share_the_snapshot() {
        use basket_core::{Cart, ItemKey, NullNotifier};

        let store = temp_store();
        let product = Product::new(9, "Kurta", "Anouk", Price::from_minor(1499, Currency::INR));
        {
            let mut cart = Cart::open(store.clone(), NullNotifier);
            cart.add_item(&product, "S", "Green", 2);
        }

        // A fresh session hydrates the previous state.
        let mut cart = Cart::open(store.clone(), NullNotifier);
        assert_eq!(cart.total().amount, 2998);

        cart.remove_item(&ItemKey::new("9", "S", "Green"));
        let next = Cart::open(store, NullNotifier);
        assert!(next.is_empty());
    }

    #[test]
    fn test_cart_degrades_on_malformed_snapshot() {
        use basket_core::{Cart, CartState, NullNotifier};

        let store = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "[{\"broken\":").unwrap();

        let cart = Cart::open(store, NullNotifier);
        assert_eq!(cart.state(), CartState::Ready);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        let store = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }
}
