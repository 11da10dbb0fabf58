//! # Line Item Types
//!
//! Cart line items and their composite identity key. At most one line item
//! exists per distinct `(product_id, size, color)` triple; adding an
//! existing triple increments quantity instead of inserting.

use crate::product::{Price, Product};
use serde::{Deserialize, Serialize};

/// Composite identity of a cart line: product plus variant selectors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    /// Stringified numeric catalog key
    pub product_id: String,
    /// Size variant
    pub size: String,
    /// Color variant
    pub color: String,
}

impl ItemKey {
    /// Create a key from its parts
    pub fn new(
        product_id: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// One purchasable selection in the cart.
///
/// Name, brand, image, and unit price are snapshotted at add time and can
/// go stale relative to the live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stringified numeric catalog key
    pub product_id: String,

    /// Product name at add time
    pub name: String,

    /// Brand at add time
    pub brand: String,

    /// Unit price at add time (sale price if one existed)
    pub price: Price,

    /// Size variant
    pub size: String,

    /// Color variant
    pub color: String,

    /// Number of units, always positive
    pub quantity: u32,

    /// First product image at add time
    pub image: String,
}

impl LineItem {
    /// Snapshot a product selection into a line item
    pub fn from_product(
        product: &Product,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.effective_price(),
            size: size.into(),
            color: color.into(),
            quantity,
            image: product.primary_image().to_string(),
        }
    }

    /// The composite identity of this line
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.product_id, &self.size, &self.color)
    }

    /// Whether this line matches a composite key
    pub fn matches(&self, key: &ItemKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Total price for this line (`unit price * quantity`)
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
