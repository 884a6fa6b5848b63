//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::notice_message;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Query parameters for the post-redirect notice banner.
#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// The featured product grid (first few catalog entries).
    pub featured: Vec<ProductView>,
    pub cart_count: u32,
    pub notice: Option<String>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse> {
    let featured = state
        .catalog()
        .featured()
        .iter()
        .map(ProductView::from)
        .collect();
    let cart_count = state.cart().item_count()?;
    let notice = query
        .notice
        .as_deref()
        .and_then(notice_message)
        .map(String::from);

    Ok(HomeTemplate {
        featured,
        cart_count,
        notice,
    })
}
