//! # basket-core
//!
//! Core cart engine and checkout types for basket-rs.
//!
//! This crate provides:
//! - `Cart` engine with composite-key line merging and derived aggregates
//! - `CartStore` trait for the persisted snapshot contract
//! - `Product`, `Catalog`, and `Price` for the typed catalog boundary
//! - `DeliveryInfo`, `ShippingPolicy`, and `place_order` for checkout
//! - `StoreError` / `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use basket_core::{Cart, Catalog, MemoryStore, TracingNotifier};
//!
//! // Open a cart backed by a store; hydration happens once, here.
//! let mut cart = Cart::open(MemoryStore::new(), TracingNotifier);
//!
//! // Add a catalog product in a size/color variant.
//! let product = catalog.get(1).unwrap();
//! cart.add_item(product, "M", "Red", 1);
//!
//! // Derived aggregates.
//! println!("{} units, total {}", cart.item_count(), cart.total().display());
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod item;
pub mod notify;
pub mod product;
pub mod store;

// Re-exports for convenience
pub use cart::{Cart, CartState};
pub use checkout::{
    place_order, summarize, DeliveryInfo, OrderReceipt, OrderSummary, PaymentMethod,
    ShippingPolicy, FREE_SHIPPING_THRESHOLD, SHIPPING_FEE,
};
pub use error::{CheckoutError, CheckoutResult, StoreError};
pub use item::{ItemKey, LineItem};
pub use notify::{Notifier, NullNotifier, TracingNotifier};
pub use product::{Catalog, Category, Currency, Price, Product};
pub use store::{CartStore, MemoryStore};
