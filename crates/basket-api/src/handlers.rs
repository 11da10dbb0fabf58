//! # Request Handlers
//!
//! Axum request handlers for the storefront API: catalog reads, cart
//! mutations, and checkout submission.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use basket_core::{
    place_order, summarize, CheckoutError, DeliveryInfo, ItemKey, LineItem, OrderSummary,
    PaymentMethod,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add-to-cart request
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Numeric catalog key
    pub product_id: u64,
    /// Size variant
    pub size: String,
    /// Color variant
    pub color: String,
    /// Units to add
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Composite key of an existing cart line
#[derive(Debug, Deserialize)]
pub struct ItemKeyRequest {
    /// Stringified catalog key, as held in the cart
    pub product_id: String,
    pub size: String,
    pub color: String,
}

impl ItemKeyRequest {
    fn key(&self) -> ItemKey {
        ItemKey::new(&self.product_id, &self.size, &self.color)
    }
}

/// Set-quantity request; zero removes the line
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

/// Checkout submission
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub delivery: DeliveryInfo,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Cart view: lines plus derived amounts
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn not_found(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message, 404)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "basket",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List catalog products
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "products": state.catalog.products,
        "count": state.catalog.products.len()
    }))
}

/// Get single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let product = state
        .catalog
        .get(product_id)
        .ok_or_else(|| not_found(format!("Product not found: {product_id}")))?;

    Ok(Json(product.clone()))
}

/// List storefront categories
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "categories": state.catalog.categories,
        "count": state.catalog.categories.len()
    }))
}

/// Current cart contents and summary
pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart();
    Json(CartResponse {
        items: cart.items().to_vec(),
        summary: summarize(&cart, &state.shipping),
    })
}

/// Add a product variant to the cart
#[instrument(skip(state), fields(product_id = request.product_id, quantity = request.quantity))]
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, (StatusCode, Json<ErrorResponse>)> {
    let product = state
        .catalog
        .get(request.product_id)
        .ok_or_else(|| not_found(format!("Product not found: {}", request.product_id)))?;

    if !product.in_stock {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                format!("Product is out of stock: {}", request.product_id),
                400,
            )),
        ));
    }

    let mut cart = state.cart();
    cart.add_item(product, &request.size, &request.color, request.quantity);

    Ok(Json(CartResponse {
        items: cart.items().to_vec(),
        summary: summarize(&cart, &state.shipping),
    }))
}

/// Set the quantity of a cart line (zero removes it)
#[instrument(skip(state), fields(product_id = %request.product_id, quantity = request.quantity))]
pub async fn set_quantity(
    State(state): State<AppState>,
    Json(request): Json<SetQuantityRequest>,
) -> impl IntoResponse {
    let key = ItemKey::new(&request.product_id, &request.size, &request.color);

    let mut cart = state.cart();
    cart.set_quantity(&key, request.quantity);

    Json(CartResponse {
        items: cart.items().to_vec(),
        summary: summarize(&cart, &state.shipping),
    })
}

/// Remove a cart line by its composite key
#[instrument(skip(state), fields(product_id = %request.product_id))]
pub async fn remove_item(
    State(state): State<AppState>,
    Json(request): Json<ItemKeyRequest>,
) -> impl IntoResponse {
    let mut cart = state.cart();
    cart.remove_item(&request.key());

    Json(CartResponse {
        items: cart.items().to_vec(),
        summary: summarize(&cart, &state.shipping),
    })
}

/// Empty the cart and delete its snapshot
#[instrument(skip(state))]
pub async fn clear_cart(State(state): State<AppState>) -> impl IntoResponse {
    let mut cart = state.cart();
    cart.clear();

    Json(CartResponse {
        items: Vec::new(),
        summary: summarize(&cart, &state.shipping),
    })
}

/// Place the order: validate delivery info, build a receipt, clear the cart
#[instrument(skip(state, request))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let mut cart = state.cart();

    let receipt = place_order(
        &mut cart,
        request.delivery,
        request.payment_method,
        &state.shipping,
    )
    .map_err(checkout_error_to_response)?;

    info!(
        "Order placed: id={}, total={}, units={}",
        receipt.order_id,
        receipt.summary.total.display(),
        receipt.summary.units
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_checkout_error_conversion() {
        let (status, _json) = checkout_error_to_response(CheckoutError::InvalidEmail);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _json) = checkout_error_to_response(CheckoutError::EmptyCart);
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_add_item_request_default_quantity() {
        let request: AddItemRequest = serde_json::from_str(
            r#"{"product_id": 1, "size": "M", "color": "Red"}"#,
        )
        .unwrap();
        assert_eq!(request.quantity, 1);
    }

    #[test]
    fn test_checkout_request_default_payment() {
        let request: CheckoutRequest = serde_json::from_str(
            r#"{"delivery": {
                "full_name": "A", "email": "a@b.co", "phone": "9876543210",
                "address": "x", "city": "y", "state": "z", "pincode": "560001"
            }}"#,
        )
        .unwrap();
        assert_eq!(request.payment_method, PaymentMethod::Cod);
    }
}
