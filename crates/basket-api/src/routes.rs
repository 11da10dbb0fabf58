//! # Routes
//!
//! Axum router configuration for the storefront API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Catalog:
///   - GET  /api/v1/products - List products
///   - GET  /api/v1/products/{id} - Get product by ID
///   - GET  /api/v1/categories - List categories
///
/// - Cart:
///   - GET    /api/v1/cart - Cart contents and summary
///   - POST   /api/v1/cart/items - Add an item
///   - PUT    /api/v1/cart/items - Set a line's quantity
///   - DELETE /api/v1/cart/items - Remove a line
///   - DELETE /api/v1/cart - Clear the cart
///
/// - Checkout:
///   - POST /api/v1/checkout - Place the order
pub fn create_router(state: AppState) -> Router {
    // CORS is wide open; the API carries no credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product))
        .route("/categories", get(handlers::list_categories));

    let cart_routes = Router::new()
        .route("/cart", get(handlers::get_cart))
        .route("/cart", delete(handlers::clear_cart))
        .route("/cart/items", post(handlers::add_item))
        .route("/cart/items", put(handlers::set_quantity))
        .route("/cart/items", delete(handlers::remove_item));

    let api_routes = Router::new()
        .merge(catalog_routes)
        .merge(cart_routes)
        .route("/checkout", post(handlers::checkout));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
