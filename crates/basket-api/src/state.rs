//! # Application State
//!
//! Shared state for the Axum application: the product catalog, the shipping
//! policy, and the server's cart engine behind a mutex. The cart is
//! single-writer by design; the persisted snapshot is shared only across
//! sessions of the same client, last writer wins.

use basket_core::{Cart, Catalog, ShippingPolicy, TracingNotifier};
use basket_store::{SnapshotStore, StoreConfig};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cart engine type used by the server
pub type ServerCart = Cart<SnapshotStore, TracingNotifier>;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product catalog
    pub catalog: Arc<Catalog>,
    /// Server cart engine
    pub cart: Arc<Mutex<ServerCart>>,
    /// Shipping fee rule
    pub shipping: ShippingPolicy,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment: catalog from config, cart
    /// hydrated from the snapshot store.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_catalog()?;

        let store = SnapshotStore::new(&StoreConfig::from_env());
        let cart = Cart::open(store, TracingNotifier);

        Ok(Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(cart)),
            shipping: ShippingPolicy::default(),
            config,
        })
    }

    /// Build state from explicit parts (for testing)
    pub fn with_parts(catalog: Catalog, cart: ServerCart) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(cart)),
            shipping: ShippingPolicy::default(),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
            },
        }
    }

    /// Lock the cart, recovering from a poisoned mutex; every engine
    /// mutation is atomic in memory so the state is usable either way
    pub fn cart(&self) -> MutexGuard<'_, ServerCart> {
        self.cart
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Load product catalog from config file
fn load_catalog() -> anyhow::Result<Catalog> {
    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = Catalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} products from {}", catalog.products.len(), path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No product catalog found, using empty catalog");
    Ok(Catalog::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_state_with_parts() {
        let dir = std::env::temp_dir().join(format!("basket-state-{}", uuid::Uuid::new_v4()));
        let store = SnapshotStore::new(&StoreConfig::new(dir));
        let state = AppState::with_parts(Catalog::new(), Cart::open(store, TracingNotifier));

        assert!(state.cart().is_empty());
        assert!(!state.config.is_production());
    }
}
