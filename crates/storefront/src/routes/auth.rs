//! Authentication route handlers.
//!
//! The demo has no accounts: login always succeeds and registration only
//! validates that the two password fields match. Both flows end in a
//! redirect with a notice, mirroring the original alert-and-navigate
//! behavior.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::notice_message;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Query parameters for notice display on auth pages.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub notice: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub notice: Option<String>,
    pub cart_count: u32,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub cart_count: u32,
}

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse> {
    Ok(LoginTemplate {
        notice: query
            .notice
            .as_deref()
            .and_then(notice_message)
            .map(String::from),
        cart_count: state.cart().item_count()?,
    })
}

/// Handle login form submission.
///
/// Always succeeds (no real credential check) and redirects home.
#[instrument(skip(form), fields(email = %form.email))]
pub async fn login(Form(form): Form<LoginForm>) -> Response {
    tracing::info!("demo login");
    Redirect::to("/?notice=logged-in").into_response()
}

/// Display the registration page.
#[instrument(skip(state))]
pub async fn register_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(RegisterTemplate {
        error: None,
        cart_count: state.cart().item_count()?,
    })
}

/// Handle registration form submission.
///
/// Mismatched passwords abort with a validation error and no state change;
/// otherwise the user is sent to the login page.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if form.password != form.confirm_password {
        return Ok(RegisterTemplate {
            error: Some("Passwords do not match!".to_string()),
            cart_count: state.cart().item_count()?,
        }
        .into_response());
    }

    tracing::info!("demo registration");
    Ok(Redirect::to("/auth/login?notice=registered").into_response())
}
