//! # basket-rs
//!
//! Storefront cart and checkout service.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export HOST=0.0.0.0
//! export PORT=8080
//! export BASKET_DATA_DIR=./data
//!
//! # Run the server
//! basket
//! ```

use basket_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.products.len());
    info!("Cart items restored: {}", state.cart().items().len());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🛒 basket-rs starting on http://{}", addr);

    if !is_prod {
        info!("Cart: GET http://{}/api/v1/cart", addr);
        info!("Checkout: POST http://{}/api/v1/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
