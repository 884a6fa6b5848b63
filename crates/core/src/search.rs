//! Catalog filtering.
//!
//! The storefront's search box and category selector are two independent
//! predicates over the catalog: a case-insensitive substring match on name
//! or description, and an exact category match. No fuzzy matching, no
//! ranking - results keep catalog order.

use crate::catalog::Product;

/// Filter criteria for a catalog listing.
///
/// An empty term or category means "no constraint".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub term: String,
    pub category: String,
}

impl CatalogFilter {
    /// Build a filter, treating `None` as unconstrained.
    #[must_use]
    pub fn new(term: Option<String>, category: Option<String>) -> Self {
        Self {
            term: term.unwrap_or_default(),
            category: category.unwrap_or_default(),
        }
    }

    /// Whether this filter constrains anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.category.is_empty()
    }

    fn matches(&self, product: &Product) -> bool {
        let matches_term = self.term.is_empty() || {
            let term = self.term.to_lowercase();
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        };
        let matches_category = self.category.is_empty() || product.category == self.category;

        matches_term && matches_category
    }
}

/// Select the products matching `filter`, preserving catalog order.
#[must_use]
pub fn filter_catalog<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}
