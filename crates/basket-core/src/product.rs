//! # Product Catalog Types
//!
//! Typed product and category records plus the catalog loaded from
//! `config/products.toml`. The cart treats catalog data as read-only input
//! at add time; prices and images are snapshotted into line items and are
//! not re-validated against live catalog state afterward.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "inr",
            Currency::USD => "usd",
            Currency::EUR => "eur",
        }
    }

    /// Number of minor-unit decimal places
    pub fn decimal_places(&self) -> u8 {
        2
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in minor currency units (paise for INR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in minor currency units
    pub amount: i64,
    /// Currency
    #[serde(default)]
    pub currency: Currency,
}

impl Price {
    /// Create a price from a minor-unit amount
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a price from a decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_f64.powi(i32::from(currency.decimal_places()));
        Self {
            amount: (amount * multiplier).round() as i64,
            currency,
        }
    }

    /// Decimal amount
    pub fn as_decimal(&self) -> f64 {
        let divisor = 10_f64.powi(i32::from(self.currency.decimal_places()));
        self.amount as f64 / divisor
    }

    /// Multiply by a quantity
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * i64::from(quantity),
            currency: self.currency,
        }
    }

    /// Format for display (e.g. "₹19.99")
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.as_decimal())
    }
}

/// A product category for storefront navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique numeric key
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
}

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique numeric catalog key
    pub id: u64,

    /// Display name
    pub name: String,

    /// Brand name
    pub brand: String,

    /// Category slug
    #[serde(default)]
    pub category: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// List price
    pub price: Price,

    /// Sale price, takes precedence over the list price when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,

    /// Image URLs; the first is snapshotted into cart line items
    #[serde(default)]
    pub images: Vec<String>,

    /// Available size variants
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Available color variants
    #[serde(default)]
    pub colors: Vec<String>,

    /// Whether this product is currently purchasable
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a product with the required fields
    pub fn new(id: u64, name: impl Into<String>, brand: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            category: String::new(),
            description: String::new(),
            price,
            sale_price: None,
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
        }
    }

    /// Builder: set sale price
    pub fn with_sale_price(mut self, price: Price) -> Self {
        self.sale_price = Some(price);
        self
    }

    /// Builder: set category slug
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = slug.into();
        self
    }

    /// Builder: add an image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Builder: set size variants
    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Builder: set color variants
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Effective unit price: sale price if present, else list price
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// First image URL, empty if the product has none
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }
}

/// Product catalog loaded from config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by numeric key
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products currently available for purchase
    pub fn in_stock_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.in_stock)
    }

    /// Products within a category
    pub fn products_in_category<'a>(
        &'a self,
        slug: &'a str,
    ) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == slug)
    }

    /// Load catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
