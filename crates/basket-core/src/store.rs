//! # Cart Store Contract
//!
//! Persistence seam for the cart engine. Implementations hold a single
//! serialized line-item snapshot under a fixed key; a missing snapshot
//! loads as an empty collection. The engine treats every store failure as
//! non-fatal: reads degrade to an empty cart, writes are fire-and-forget.

use crate::error::StoreError;
use crate::item::LineItem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Persistent snapshot storage for cart line items
pub trait CartStore {
    /// Load the persisted snapshot. A missing snapshot is `Ok(vec![])`;
    /// a present but unreadable one is an error.
    fn load(&self) -> Result<Vec<LineItem>, StoreError>;

    /// Replace the persisted snapshot with the given items
    fn save(&self, items: &[LineItem]) -> Result<(), StoreError>;

    /// Delete the persisted snapshot
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: CartStore + ?Sized> CartStore for Arc<S> {
    fn load(&self) -> Result<Vec<LineItem>, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        (**self).save(items)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store.
///
/// Used as the default store for tests and short-lived carts. Failure
/// injection flags let tests exercise the engine's degrade paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<Vec<LineItem>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot
    pub fn with_snapshot(items: Vec<LineItem>) -> Self {
        Self {
            snapshot: Mutex::new(Some(items)),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves and clears fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The current snapshot, if one has been saved
    pub fn snapshot(&self) -> Option<Vec<LineItem>> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn cell(&self) -> std::sync::MutexGuard<'_, Option<Vec<LineItem>>> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Vec<LineItem>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("injected read failure".to_string()));
        }
        Ok(self.cell().clone().unwrap_or_default())
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }
        *self.cell() = Some(items.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }
        *self.cell() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Currency, Price, Product};

    fn item(quantity: u32) -> LineItem {
        let product = Product::new(1, "Tee", "Roadster", Price::from_minor(599, Currency::INR));
        LineItem::from_product(&product, "M", "Red", quantity)
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryStore::new();
        let items = vec![item(1), item(2)];

        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let store = MemoryStore::new();
        store.save(&[item(1)]).unwrap();
        store.clear().unwrap();

        assert!(store.snapshot().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_failure_injection() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(store.save(&[item(1)]).is_err());

        store.set_fail_writes(false);
        store.set_fail_reads(true);
        assert!(store.load().is_err());
    }
}
