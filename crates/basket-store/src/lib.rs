//! # basket-store
//!
//! File-backed persistence for the basket-rs cart engine.
//!
//! Implements the `CartStore` contract from `basket-core` with a single
//! JSON snapshot file in a configured data directory. The engine treats
//! every failure here as non-fatal; this crate only reports them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use basket_core::{Cart, TracingNotifier};
//! use basket_store::{SnapshotStore, StoreConfig};
//!
//! let store = SnapshotStore::new(&StoreConfig::from_env());
//! let mut cart = Cart::open(store, TracingNotifier);
//! ```

pub mod config;
pub mod snapshot;

// Re-exports
pub use config::StoreConfig;
pub use snapshot::{SnapshotStore, CART_KEY};
