//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured grid)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Catalog with search + category filter
//! GET  /products/grid          - Filtered grid fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns confirmation notice,
//!                                triggers cart-updated)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout page with final total
//! POST /checkout               - Place order (clears the cart)
//!
//! # Auth (demo only - no real accounts)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Notices shown after redirects, keyed by a short code in the query string.
///
/// The original storefront used blocking `alert()` dialogs; a redirect with a
/// notice banner is the server-rendered equivalent.
#[must_use]
pub fn notice_message(code: &str) -> Option<&'static str> {
    match code {
        "order-placed" => {
            Some("Order placed successfully! Your medicines will be delivered soon.")
        }
        "logged-in" => Some("Login successful!"),
        "registered" => Some("Registration successful! Please login."),
        _ => None,
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/grid", get(products::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::place))
        // Auth routes
        .nest("/auth", auth_routes())
}
