//! # Cart Engine
//!
//! Ordered in-memory collection of line items with derived aggregates and
//! a persistence contract. Mutations are synchronous and atomic with
//! respect to in-memory state; after every mutation the full list is
//! written to the store fire-and-forget. Store failures never reach the
//! caller: reads degrade to an empty cart, writes are logged and swallowed.

use crate::item::{ItemKey, LineItem};
use crate::notify::Notifier;
use crate::product::{Currency, Price, Product};
use crate::store::CartStore;
use tracing::warn;

/// Hydration state of the engine.
///
/// `Loading` -> `Ready` happens exactly once, during [`Cart::open`],
/// regardless of whether persisted data existed or the load failed. There
/// is no reverse transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// Constructed, not yet hydrated from the store
    Loading,
    /// Hydrated; mutations permitted
    Ready,
}

/// The cart engine, explicitly constructed and dependency-injected.
///
/// Generic over its persistence store and notification sink so consumers
/// receive an instance with its own lifecycle rather than importing shared
/// mutable state.
#[derive(Debug)]
pub struct Cart<S: CartStore, N: Notifier> {
    items: Vec<LineItem>,
    state: CartState,
    store: S,
    notifier: N,
}

impl<S: CartStore, N: Notifier> Cart<S, N> {
    /// Create an unhydrated engine in the `Loading` state
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            items: Vec::new(),
            state: CartState::Loading,
            store,
            notifier,
        }
    }

    /// Create an engine and hydrate it from the store.
    ///
    /// The returned cart is always `Ready`; a missing or malformed
    /// snapshot degrades to an empty cart with the failure logged.
    pub fn open(store: S, notifier: N) -> Self {
        let mut cart = Self::new(store, notifier);
        cart.hydrate();
        cart
    }

    /// Hydrate from the persisted snapshot. Idempotent: only the first
    /// call transitions `Loading` -> `Ready`.
    pub fn hydrate(&mut self) {
        if self.state == CartState::Ready {
            return;
        }
        match self.store.load() {
            Ok(items) => self.items = items,
            Err(e) => {
                warn!("cart load failed, starting empty: {e}");
                self.items.clear();
            }
        }
        self.state = CartState::Ready;
    }

    /// Current hydration state
    pub fn state(&self) -> CartState {
        self.state
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product selection to the cart.
    ///
    /// If a line with the same `(product_id, size, color)` already exists
    /// its quantity is incremented by `quantity` (no upper bound);
    /// otherwise a new line is appended snapshotting the product's name,
    /// brand, first image, and effective price.
    pub fn add_item(&mut self, product: &Product, size: &str, color: &str, quantity: u32) {
        if !self.mutable() || quantity == 0 {
            return;
        }

        let key = ItemKey::new(product.id.to_string(), size, color);
        match self.items.iter_mut().find(|item| item.matches(&key)) {
            Some(existing) => existing.quantity += quantity,
            None => self
                .items
                .push(LineItem::from_product(product, size, color, quantity)),
        }

        self.persist();
        self.notifier.success("Added to cart!");
    }

    /// Remove the line matching the key; no-op (not an error) if absent
    pub fn remove_item(&mut self, key: &ItemKey) {
        if !self.mutable() {
            return;
        }

        self.items.retain(|item| !item.matches(key));
        self.persist();
        self.notifier.success("Removed from cart");
    }

    /// Set the quantity of the line matching the key.
    ///
    /// A quantity of zero delegates to [`Cart::remove_item`]. No-op if no
    /// line matches.
    pub fn set_quantity(&mut self, key: &ItemKey, quantity: u32) {
        if quantity == 0 {
            self.remove_item(key);
            return;
        }
        if !self.mutable() {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.matches(key)) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart and delete the persisted snapshot
    pub fn clear(&mut self) {
        if !self.mutable() {
            return;
        }

        self.items.clear();
        if let Err(e) = self.store.clear() {
            warn!("cart snapshot delete failed: {e}");
        }
        self.notifier.success("Cart cleared");
    }

    /// Sum of `unit price * quantity` over all lines
    pub fn total(&self) -> Price {
        let amount = self.items.iter().map(|item| item.line_total().amount).sum();
        Price::from_minor(amount, self.currency())
    }

    /// Total number of units (not distinct lines)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Currency of the cart's items
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|item| item.price.currency)
            .unwrap_or_default()
    }

    fn mutable(&self) -> bool {
        if self.state == CartState::Loading {
            warn!("cart mutation before hydration; ignored");
            return false;
        }
        true
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            warn!("cart persist failed, in-memory state stays authoritative: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullNotifier;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn product(id: u64, minor: i64) -> Product {
        Product::new(id, format!("Product {id}"), "Roadster", Price::from_minor(minor, Currency::INR))
            .with_image("https://cdn.example.com/p.jpg")
    }

    fn open_cart() -> Cart<Arc<MemoryStore>, NullNotifier> {
        Cart::open(Arc::new(MemoryStore::new()), NullNotifier)
    }

    #[test]
    fn test_add_merges_on_composite_key() {
        let mut cart = open_cart();
        let p = product(1, 1000);

        cart.add_item(&p, "M", "Red", 2);
        cart.add_item(&p, "M", "Red", 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_distinct_variants_get_distinct_lines() {
        let mut cart = open_cart();
        let p = product(1, 1000);

        cart.add_item(&p, "M", "Red", 1);
        cart.add_item(&p, "L", "Red", 1);
        cart.add_item(&p, "M", "Blue", 1);

        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_running_totals_through_add_and_remove() {
        let mut cart = open_cart();
        let p = product(1, 1000);

        cart.add_item(&p, "M", "Red", 1);
        assert_eq!(cart.total().amount, 1000);
        assert_eq!(cart.item_count(), 1);

        cart.add_item(&p, "M", "Red", 2);
        assert_eq!(cart.total().amount, 3000);
        assert_eq!(cart.item_count(), 3);

        cart.remove_item(&ItemKey::new("1", "M", "Red"));
        assert_eq!(cart.total().amount, 0);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_sums_across_lines() {
        let mut cart = open_cart();
        cart.add_item(&product(1, 1000), "M", "Red", 2);
        cart.add_item(&product(2, 2500), "L", "Blue", 1);

        assert_eq!(cart.total().amount, 4500);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_set_quantity_replaces_in_place() {
        let mut cart = open_cart();
        cart.add_item(&product(1, 1000), "M", "Red", 2);

        cart.set_quantity(&ItemKey::new("1", "M", "Red"), 7);
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.total().amount, 7000);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = open_cart();
        cart.add_item(&product(1, 1000), "M", "Red", 2);

        cart.set_quantity(&ItemKey::new("1", "M", "Red"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_key_is_noop() {
        let mut cart = open_cart();
        cart.add_item(&product(1, 1000), "M", "Red", 1);

        cart.remove_item(&ItemKey::new("9", "M", "Red"));
        cart.set_quantity(&ItemKey::new("1", "XL", "Red"), 5);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_hydrates_from_persisted_snapshot() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut cart = Cart::open(Arc::clone(&store), NullNotifier);
            cart.add_item(&product(1, 1000), "M", "Red", 2);
        }

        let cart = Cart::open(store, NullNotifier);
        assert_eq!(cart.state(), CartState::Ready);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total().amount, 2000);
    }

    #[test]
    fn test_clear_deletes_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = Cart::open(Arc::clone(&store), NullNotifier);
        cart.add_item(&product(1, 1000), "M", "Red", 1);
        cart.clear();

        assert!(cart.is_empty());
        assert!(store.snapshot().is_none());

        // A fresh session sees an empty cart.
        let next = Cart::open(store, NullNotifier);
        assert!(next.is_empty());
    }

    #[test]
    fn test_load_failure_degrades_to_empty_ready_cart() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_reads(true);

        let cart = Cart::open(Arc::clone(&store), NullNotifier);
        assert_eq!(cart.state(), CartState::Ready);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = Cart::open(Arc::clone(&store), NullNotifier);
        store.set_fail_writes(true);

        cart.add_item(&product(1, 1000), "M", "Red", 2);

        // The mutation still applied in memory even though the save failed.
        assert_eq!(cart.item_count(), 2);
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_mutations_before_hydration_are_ignored() {
        let mut cart = Cart::new(MemoryStore::new(), NullNotifier);
        assert_eq!(cart.state(), CartState::Loading);

        cart.add_item(&product(1, 1000), "M", "Red", 1);
        assert!(cart.is_empty());

        cart.hydrate();
        assert_eq!(cart.state(), CartState::Ready);
        cart.add_item(&product(1, 1000), "M", "Red", 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut cart = open_cart();
        cart.add_item(&product(1, 1000), "M", "Red", 0);
        assert!(cart.is_empty());
    }
}
