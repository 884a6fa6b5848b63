//! Product route handlers.
//!
//! The catalog page supports plain GET navigation (query parameters) and
//! HTMX live filtering against the grid fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use medigrove_core::{CatalogFilter, Product, filter_catalog};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Search and filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Search term matched against name and description.
    pub q: Option<String>,
    /// Category filter; empty or absent means all categories.
    pub category: Option<String>,
}

impl From<CatalogQuery> for CatalogFilter {
    fn from(query: CatalogQuery) -> Self {
        Self::new(query.q, query.category)
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub categories: Vec<String>,
    pub q: String,
    pub category: String,
    pub cart_count: u32,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

fn filtered_views(state: &AppState, filter: &CatalogFilter) -> Vec<ProductView> {
    filter_catalog(state.catalog().products(), filter)
        .into_iter()
        .map(ProductView::from)
        .collect()
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse> {
    let filter = CatalogFilter::from(query);
    let products = filtered_views(&state, &filter);
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(String::from)
        .collect();
    let cart_count = state.cart().item_count()?;

    Ok(ProductsIndexTemplate {
        products,
        categories,
        q: filter.term,
        category: filter.category,
        cart_count,
    })
}

/// Display the filtered product grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let filter = CatalogFilter::from(query);

    ProductGridTemplate {
        products: filtered_views(&state, &filter),
    }
}
