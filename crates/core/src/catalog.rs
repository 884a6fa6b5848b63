//! The fixed product catalog.
//!
//! The catalog is defined once at startup and never mutated. Products keep
//! their definition order, which is also the order every listing and filter
//! result preserves.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A purchasable product.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Enum-like category tag (e.g., "painkiller"). Compared by equality.
    pub category: String,
    pub description: String,
    /// Path to the product image, relative to the static root.
    pub image: String,
}

/// The read-only set of products available in the store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Number of products shown in the featured grid on the home page.
const FEATURED_COUNT: usize = 4;

impl Catalog {
    /// Build a catalog from a list of products, keeping their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in pharmacy catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let product = |id: i32, name: &str, cents: i64, category: &str, description: &str, image: &str| {
            Product {
                id: ProductId::new(id),
                name: name.to_string(),
                price: Price::from_cents(cents),
                category: category.to_string(),
                description: description.to_string(),
                image: image.to_string(),
            }
        };

        Self::new(vec![
            product(1, "Paracetamol", 51000, "painkiller", "Pain relief medicine", "images/paracetamol.jpeg"),
            product(2, "Ibuprofen", 70000, "painkiller", "Anti-inflammatory", "images/ibuprofen.jpeg"),
            product(3, "Amoxicillin", 12500, "antibiotic", "Antibiotic medicine", "images/amoxicillin.jpeg"),
            product(4, "Vitamin D3", 15000, "vitamin", "Vitamin supplement", "images/vitamin_d3.jpeg"),
            product(5, "Cetirizine", 8000, "antihistamine", "Allergy medicine", "images/cetirizine.jpeg"),
            product(6, "Omeprazole", 11000, "antacid", "Stomach acid reducer", "images/omeprazole.jpeg"),
        ])
    }

    /// All products, in definition order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The products shown on the home page (the first few, like the
    /// original storefront).
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        self.products
            .get(..FEATURED_COUNT.min(self.products.len()))
            .unwrap_or_default()
    }

    /// Distinct categories in definition order, for the category selector.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
