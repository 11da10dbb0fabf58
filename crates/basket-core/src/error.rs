//! # Error Types
//!
//! Typed errors for the basket engine and its collaborators.
//!
//! Two kinds exist: [`StoreError`] for persistence failures, which the cart
//! engine logs and swallows, and [`CheckoutError`] for validation failures,
//! which are surfaced to the caller and abort the order.

use thiserror::Error;

/// Persistence failures from a [`CartStore`](crate::store::CartStore).
///
/// These never reach cart callers: the engine degrades to an empty or
/// in-memory cart and logs the failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the persisted snapshot failed
    #[error("snapshot read failed: {0}")]
    Read(String),

    /// Writing the snapshot failed
    #[error("snapshot write failed: {0}")]
    Write(String),

    /// The snapshot exists but could not be parsed
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

/// Errors surfaced by the checkout flow.
///
/// Validation failures abort the order with no partial submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout attempted with no items in the cart
    #[error("cart is empty")]
    EmptyCart,

    /// A required delivery field was left blank
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Email does not match the `local@domain.tld` shape
    #[error("invalid email address")]
    InvalidEmail,

    /// Phone number is not exactly 10 digits
    #[error("phone number must be 10 digits")]
    InvalidPhone,

    /// Pincode is not exactly 6 digits
    #[error("pincode must be 6 digits")]
    InvalidPincode,
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::EmptyCart => 409,
            CheckoutError::MissingField { .. }
            | CheckoutError::InvalidEmail
            | CheckoutError::InvalidPhone
            | CheckoutError::InvalidPincode => 400,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CheckoutError::EmptyCart.status_code(), 409);
        assert_eq!(
            CheckoutError::MissingField { field: "email" }.status_code(),
            400
        );
        assert_eq!(CheckoutError::InvalidPhone.status_code(), 400);
    }

    #[test]
    fn test_error_display() {
        let err = CheckoutError::MissingField { field: "pincode" };
        assert_eq!(err.to_string(), "missing required field: pincode");
    }
}
