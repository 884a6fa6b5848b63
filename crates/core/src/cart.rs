//! The cart state machine.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s, one per distinct product,
//! in first-add order. Adding an already-carted product bumps its quantity
//! instead of appending a second line. All operations here are pure in-memory
//! mutations; persistence is the caller's concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Cart operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested product id does not exist in the catalog.
    ///
    /// The original storefront left this unchecked (the id always came from
    /// a rendered catalog entry); here it is a checked precondition.
    #[error("unknown product id: {0}")]
    UnknownProduct(ProductId),
}

/// One cart entry: a product snapshot plus a quantity.
///
/// This is the unit of the persisted snapshot, so its serde shape is the
/// on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: String,
    pub image: String,
    /// Always >= 1; a line is removed rather than dropped to zero.
    pub quantity: u32,
}

impl CartLine {
    /// The price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// An ordered collection of cart lines.
///
/// Invariant: at most one line per distinct product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Restore a cart from a persisted snapshot.
    #[must_use]
    pub const fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The cart lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product` to the cart.
    ///
    /// Increments the existing line's quantity if the product is already
    /// carted, otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from(product));
        }
    }

    /// Remove the line for `id`, if present.
    ///
    /// Returns `true` if a line was removed. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Total price over all lines (price times quantity). Zero for an empty
    /// cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Empty the cart (checkout completion).
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
