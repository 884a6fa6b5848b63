//! The cart manager service.
//!
//! Owns the single mutable cart for the process, keyed to the persisted
//! snapshot slot. All mutations happen under one mutex and are followed by a
//! full snapshot write, so the slot always reflects the in-memory cart
//! (last-writer-wins, no partial updates).

use std::sync::{Arc, Mutex};

use medigrove_core::{Cart, CartError, Catalog, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::{CartStore, StorageError};

/// Cart service errors.
#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("cart lock poisoned")]
    LockPoisoned,
}

/// Result of a successful add-to-cart, for the confirmation notice and the
/// badge update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    pub product_name: String,
    pub item_count: u32,
}

/// The cart manager.
///
/// Constructed once per process. The persisted snapshot is read at
/// construction; a missing or malformed snapshot degrades to an empty cart
/// (logged, not surfaced), matching how a browser store would behave.
pub struct CartService {
    catalog: Arc<Catalog>,
    cart: Mutex<Cart>,
    store: Box<dyn CartStore>,
}

impl CartService {
    /// Create the service, loading the persisted snapshot.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, store: Box<dyn CartStore>) -> Self {
        let cart = match store.load() {
            Ok(lines) => {
                tracing::debug!(lines = lines.len(), "cart snapshot loaded");
                Cart::from_lines(lines)
            }
            Err(e) => {
                tracing::warn!("discarding unreadable cart snapshot: {e}");
                Cart::new()
            }
        };

        Self {
            catalog,
            cart: Mutex::new(cart),
            store,
        }
    }

    /// Add one unit of the product to the cart and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownProduct` for an id not in the catalog, or
    /// `StorageError` if the snapshot write fails.
    pub fn add_to_cart(&self, id: ProductId) -> Result<AddedToCart, CartServiceError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(CartError::UnknownProduct(id))?;

        let mut cart = self.cart.lock().map_err(|_| CartServiceError::LockPoisoned)?;
        cart.add(product);
        self.store.save(cart.lines())?;

        tracing::info!(product = %product.name, count = cart.item_count(), "added to cart");
        Ok(AddedToCart {
            product_name: product.name.clone(),
            item_count: cart.item_count(),
        })
    }

    /// Remove the line for `id` (no-op if absent) and persist the snapshot.
    ///
    /// Returns the resulting cart state for re-rendering.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot write fails.
    pub fn remove_from_cart(&self, id: ProductId) -> Result<Cart, CartServiceError> {
        let mut cart = self.cart.lock().map_err(|_| CartServiceError::LockPoisoned)?;
        let removed = cart.remove(id);
        self.store.save(cart.lines())?;

        if removed {
            tracing::info!(product_id = %id, "removed from cart");
        }
        Ok(cart.clone())
    }

    /// Empty the cart (checkout completion) and persist the empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot write fails.
    pub fn clear_cart(&self) -> Result<(), CartServiceError> {
        let mut cart = self.cart.lock().map_err(|_| CartServiceError::LockPoisoned)?;
        cart.clear();
        self.store.save(cart.lines())?;

        tracing::info!("cart cleared");
        Ok(())
    }

    /// A copy of the current cart state, for rendering.
    ///
    /// # Errors
    ///
    /// Fails only if the cart lock is poisoned.
    pub fn snapshot(&self) -> Result<Cart, CartServiceError> {
        self.cart
            .lock()
            .map(|cart| cart.clone())
            .map_err(|_| CartServiceError::LockPoisoned)
    }

    /// Current cart total (price times quantity over all lines).
    ///
    /// # Errors
    ///
    /// Fails only if the cart lock is poisoned.
    pub fn total(&self) -> Result<Decimal, CartServiceError> {
        self.cart
            .lock()
            .map(|cart| cart.total())
            .map_err(|_| CartServiceError::LockPoisoned)
    }

    /// Total units in the cart, for the badge.
    ///
    /// # Errors
    ///
    /// Fails only if the cart lock is poisoned.
    pub fn item_count(&self) -> Result<u32, CartServiceError> {
        self.cart
            .lock()
            .map(|cart| cart.item_count())
            .map_err(|_| CartServiceError::LockPoisoned)
    }
}
