//! Route-level tests driving the storefront router in-process.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use medigrove_core::{Catalog, CartLine};
use medigrove_storefront::config::StorefrontConfig;
use medigrove_storefront::routes;
use medigrove_storefront::state::AppState;
use medigrove_storefront::store::{CartStore, MemoryCartStore, StorageError};
use tower::ServiceExt;

/// Store handle that stays inspectable after the state takes ownership.
struct SharedStore(Arc<MemoryCartStore>);

impl CartStore for SharedStore {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        self.0.load()
    }
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        self.0.save(lines)
    }
}

fn app_with_store(store: Box<dyn CartStore>) -> Router {
    let state = AppState::with_store(StorefrontConfig::default(), Catalog::builtin(), store);
    routes::routes()
        .route("/health", axum::routing::get(|| async { "ok" }))
        .with_state(state)
}

fn app() -> Router {
    app_with_store(Box::new(MemoryCartStore::new()))
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_check() {
    let response = get(&app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn home_page_shows_featured_grid() {
    let response = get(&app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("featured-grid"));
    // Featured = first four products.
    assert!(body.contains("Paracetamol"));
    assert!(body.contains("Vitamin D3"));
    assert!(!body.contains("Omeprazole"));
}

#[tokio::test]
async fn home_page_renders_notice_after_redirect() {
    let response = get(&app(), "/?notice=order-placed").await;
    let body = body_string(response).await;
    assert!(body.contains("Order placed successfully!"));
}

#[tokio::test]
async fn products_page_lists_whole_catalog_without_filters() {
    let response = get(&app(), "/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    for name in [
        "Paracetamol",
        "Ibuprofen",
        "Amoxicillin",
        "Vitamin D3",
        "Cetirizine",
        "Omeprazole",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn products_page_filters_by_search_term() {
    let response = get(&app(), "/products?q=ibu").await;
    let body = body_string(response).await;

    assert!(body.contains("Ibuprofen"));
    assert!(!body.contains("Paracetamol"));
    assert!(!body.contains("Amoxicillin"));
}

#[tokio::test]
async fn products_page_filters_by_category() {
    let response = get(&app(), "/products?category=painkiller").await;
    let body = body_string(response).await;

    assert!(body.contains("Paracetamol"));
    assert!(body.contains("Ibuprofen"));
    assert!(!body.contains("Cetirizine"));
}

#[tokio::test]
async fn grid_fragment_matches_description_text() {
    let response = get(&app(), "/products/grid?q=allergy").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("catalog-grid"));
    assert!(body.contains("Cetirizine"));
    assert!(!body.contains("Ibuprofen"));
}

#[tokio::test]
async fn add_to_cart_confirms_and_triggers_badge_update() {
    let app = app();
    let response = post_form(&app, "/cart/add", "product_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let body = body_string(response).await;
    assert!(body.contains("Paracetamol added to cart!"));
}

#[tokio::test]
async fn add_to_cart_unknown_product_is_rejected() {
    let response = post_form(&app(), "/cart/add", "product_id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("unknown product id: 999"));
}

#[tokio::test]
async fn adding_twice_yields_one_line_with_quantity_two() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=2").await;
    post_form(&app, "/cart/add", "product_id=2").await;

    let body = body_string(get(&app, "/cart").await).await;
    assert!(body.contains("Quantity: 2"));
    assert_eq!(body.matches("Quantity:").count(), 1, "expected one line");

    let count = body_string(get(&app, "/cart/count").await).await;
    assert_eq!(count.trim(), "2");
}

#[tokio::test]
async fn cart_page_shows_total_of_price_times_quantity() {
    let app = app();
    // 2x Paracetamol ($510.00) + 1x Cetirizine ($80.00) = $1100.00
    post_form(&app, "/cart/add", "product_id=1").await;
    post_form(&app, "/cart/add", "product_id=1").await;
    post_form(&app, "/cart/add", "product_id=5").await;

    let body = body_string(get(&app, "/cart").await).await;
    assert!(body.contains("$1100.00"));
}

#[tokio::test]
async fn remove_from_cart_rerenders_items_fragment() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=4").await;
    post_form(&app, "/cart/add", "product_id=5").await;

    let response = post_form(&app, "/cart/remove", "product_id=4").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let body = body_string(response).await;
    assert!(!body.contains("Vitamin D3"));
    assert!(body.contains("Cetirizine"));
}

#[tokio::test]
async fn remove_of_absent_id_leaves_cart_unchanged() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=6").await;

    let response = post_form(&app, "/cart/remove", "product_id=999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Omeprazole"));

    let count = body_string(get(&app, "/cart/count").await).await;
    assert_eq!(count.trim(), "1");
}

#[tokio::test]
async fn empty_cart_page_shows_zero_total() {
    let body = body_string(get(&app(), "/cart").await).await;
    assert!(body.contains("Your cart is empty"));
    assert!(body.contains("$0.00"));
}

#[tokio::test]
async fn checkout_page_shows_final_total() {
    let app = app();
    post_form(&app, "/cart/add", "product_id=3").await;

    let body = body_string(get(&app, "/checkout").await).await;
    assert!(body.contains("final-total"));
    assert!(body.contains("$125.00"));
}

#[tokio::test]
async fn checkout_with_empty_cart_is_a_validation_failure() {
    let response = post_form(&app(), "/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty!"));
}

#[tokio::test]
async fn checkout_clears_cart_and_persists_empty_snapshot() {
    let store = Arc::new(MemoryCartStore::new());
    let app = app_with_store(Box::new(SharedStore(Arc::clone(&store))));

    post_form(&app, "/cart/add", "product_id=1").await;
    let response = post_form(&app, "/checkout", "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?notice=order-placed"
    );

    let count = body_string(get(&app, "/cart/count").await).await;
    assert_eq!(count.trim(), "0");
    assert_eq!(store.raw().as_deref(), Some("[]"));
}

#[tokio::test]
async fn cart_snapshot_survives_restart() {
    let store = Arc::new(MemoryCartStore::new());

    let app = app_with_store(Box::new(SharedStore(Arc::clone(&store))));
    post_form(&app, "/cart/add", "product_id=2").await;
    post_form(&app, "/cart/add", "product_id=2").await;
    drop(app);

    let revived = app_with_store(Box::new(SharedStore(store)));
    let count = body_string(get(&revived, "/cart/count").await).await;
    assert_eq!(count.trim(), "2");
}

#[tokio::test]
async fn corrupt_snapshot_starts_with_empty_cart() {
    let app = app_with_store(Box::new(MemoryCartStore::with_raw("<<definitely not json>>")));
    let count = body_string(get(&app, "/cart/count").await).await;
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
async fn failed_snapshot_write_surfaces_as_server_error() {
    let app = app_with_store(Box::new(MemoryCartStore::failing()));
    let response = post_form(&app, "/cart/add", "product_id=1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn register_with_mismatched_passwords_fails_validation() {
    let response = post_form(
        &app(),
        "/auth/register",
        "email=demo%40example.com&password=hunter2&confirm_password=hunter3",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Passwords do not match!"));
}

#[tokio::test]
async fn register_success_redirects_to_login() {
    let response = post_form(
        &app(),
        "/auth/register",
        "email=demo%40example.com&password=hunter2&confirm_password=hunter2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login?notice=registered"
    );
}

#[tokio::test]
async fn login_redirects_home() {
    let response = post_form(
        &app(),
        "/auth/login",
        "email=demo%40example.com&password=whatever",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?notice=logged-in"
    );
}

#[tokio::test]
async fn login_page_shows_registration_notice() {
    let body = body_string(get(&app(), "/auth/login?notice=registered").await).await;
    assert!(body.contains("Registration successful! Please login."));
}
