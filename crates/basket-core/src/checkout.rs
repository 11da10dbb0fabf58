//! # Checkout Flow
//!
//! The checkout collaborator: validates delivery information, applies the
//! flat shipping-fee rule, and on submission clears the cart. Validation
//! failures abort the order with no partial submission.

use crate::cart::Cart;
use crate::error::{CheckoutError, CheckoutResult};
use crate::item::LineItem;
use crate::notify::Notifier;
use crate::product::Price;
use crate::store::CartStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subtotal (minor units) at or above which shipping is free
pub const FREE_SHIPPING_THRESHOLD: i64 = 1999;

/// Flat shipping fee (minor units) below the threshold
pub const SHIPPING_FEE: i64 = 99;

/// Delivery details collected at checkout. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl DeliveryInfo {
    /// Validate all fields; returns the first violation found.
    ///
    /// Rules: no field may be blank, the email must have a
    /// `local@domain.tld` shape, the phone must be exactly 10 digits, and
    /// the pincode exactly 6 digits.
    pub fn validate(&self) -> CheckoutResult<()> {
        let required: [(&'static str, &str); 7] = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField { field });
            }
        }

        if !is_valid_email(&self.email) {
            return Err(CheckoutError::InvalidEmail);
        }
        if !is_digits(&self.phone, 10) {
            return Err(CheckoutError::InvalidPhone);
        }
        if !is_digits(&self.pincode, 6) {
            return Err(CheckoutError::InvalidPincode);
        }
        Ok(())
    }
}

/// `local@domain.tld`: one `@`, no whitespace, dot in the domain with
/// non-empty segments around it.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Payment method selected at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery
    Cod,
    /// Credit/debit card
    Card,
    /// UPI
    Upi,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cod
    }
}

/// Flat shipping-fee rule: free at or above a subtotal threshold, fixed
/// fee otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotal (minor units) at which shipping becomes free
    pub free_over: i64,
    /// Flat fee (minor units) below the threshold
    pub fee: i64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_over: FREE_SHIPPING_THRESHOLD,
            fee: SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Shipping fee (minor units) for a subtotal
    pub fn fee_for(&self, subtotal: i64) -> i64 {
        if subtotal >= self.free_over {
            0
        } else {
            self.fee
        }
    }
}

/// Derived order amounts shown to the user before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    /// Unit count across all lines
    pub units: u32,
}

/// Compute the order summary for the cart's current state
pub fn summarize<S: CartStore, N: Notifier>(
    cart: &Cart<S, N>,
    policy: &ShippingPolicy,
) -> OrderSummary {
    let subtotal = cart.total();
    let shipping = Price::from_minor(policy.fee_for(subtotal.amount), subtotal.currency);
    OrderSummary {
        subtotal,
        shipping,
        total: Price::from_minor(subtotal.amount + shipping.amount, subtotal.currency),
        units: cart.item_count(),
    }
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Generated order id
    pub order_id: String,
    /// Submission timestamp
    pub placed_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub summary: OrderSummary,
    /// Lines as purchased
    pub items: Vec<LineItem>,
    /// Delivery snapshot
    pub delivery: DeliveryInfo,
}

/// Validate and submit the order.
///
/// Rejects an empty cart, validates delivery info, then builds a receipt
/// and clears the cart (collection emptied, snapshot deleted). On any
/// error nothing is submitted and the cart is left untouched.
pub fn place_order<S: CartStore, N: Notifier>(
    cart: &mut Cart<S, N>,
    delivery: DeliveryInfo,
    payment_method: PaymentMethod,
    policy: &ShippingPolicy,
) -> CheckoutResult<OrderReceipt> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    delivery.validate()?;

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4().to_string(),
        placed_at: Utc::now(),
        payment_method,
        summary: summarize(cart, policy),
        items: cart.items().to_vec(),
        delivery,
    };
    cart.clear();
    Ok(receipt)
}
