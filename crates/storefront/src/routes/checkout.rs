//! Checkout route handlers.
//!
//! The demo checkout takes no payment: placing an order validates that the
//! cart is non-empty, clears it, persists the empty snapshot, and redirects
//! home with a confirmation notice.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub error: Option<String>,
    pub cart_count: u32,
}

/// Display the checkout page with the final total.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cart = CartView::from(&state.cart().snapshot()?);
    let cart_count = cart.item_count;

    Ok(CheckoutTemplate {
        cart,
        error: None,
        cart_count,
    })
}

/// Place the order.
///
/// An empty cart is a validation failure: the page is re-rendered with the
/// error and no state changes. Otherwise the cart is cleared and the user is
/// redirected home.
#[instrument(skip(state))]
pub async fn place(State(state): State<AppState>) -> Result<Response> {
    let cart = CartView::from(&state.cart().snapshot()?);
    if cart.items.is_empty() {
        let cart_count = cart.item_count;
        return Ok(CheckoutTemplate {
            cart,
            error: Some("Your cart is empty!".to_string()),
            cart_count,
        }
        .into_response());
    }

    state.cart().clear_cart()?;
    Ok(Redirect::to("/?notice=order-placed").into_response())
}
