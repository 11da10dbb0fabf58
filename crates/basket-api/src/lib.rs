//! # basket-api
//!
//! HTTP API layer for basket-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the catalog, cart, and checkout
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | List products |
//! | GET | `/api/v1/products/:id` | Get product |
//! | GET | `/api/v1/categories` | List categories |
//! | GET | `/api/v1/cart` | Cart contents |
//! | POST | `/api/v1/cart/items` | Add item |
//! | PUT | `/api/v1/cart/items` | Set line quantity |
//! | DELETE | `/api/v1/cart/items` | Remove line |
//! | DELETE | `/api/v1/cart` | Clear cart |
//! | POST | `/api/v1/checkout` | Place order |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
