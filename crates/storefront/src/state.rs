//! Application state shared across handlers.

use std::sync::Arc;

use medigrove_core::Catalog;

use crate::config::StorefrontConfig;
use crate::services::CartService;
use crate::store::{CartStore, FileCartStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart service, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    cart: CartService,
}

impl AppState {
    /// Create the application state with the file-backed cart store from
    /// the configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = Box::new(FileCartStore::new(config.cart_path.clone()));
        Self::with_store(config, Catalog::builtin(), store)
    }

    /// Create the application state with an explicit catalog and store
    /// (used by tests).
    #[must_use]
    pub fn with_store(
        config: StorefrontConfig,
        catalog: Catalog,
        store: Box<dyn CartStore>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let cart = CartService::new(Arc::clone(&catalog), store);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }
}
