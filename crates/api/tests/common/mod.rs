#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_core::policy::{CatalogPolicy, DeletionPolicy, VisibilityPolicy};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// The one browser origin the test config allows.
pub const TEST_ORIGIN: &str = "https://shop.catalog.test";

/// Build a test `ServerConfig` with safe defaults and the given policy.
pub fn test_config(catalog_policy: CatalogPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static(TEST_ORIGIN)],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 1,
        catalog_policy,
    }
}

/// Build the full application router (default soft-delete policy).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_policy(pool, CatalogPolicy::default())
}

/// Build the full application router with hard deletion and no visibility filter.
pub fn build_hard_delete_app(pool: PgPool) -> Router {
    build_test_app_with_policy(
        pool,
        CatalogPolicy::new(VisibilityPolicy::All, DeletionPolicy::Hard),
    )
}

/// Build the full application router running the given catalog policy.
pub fn build_test_app_with_policy(pool: PgPool, policy: CatalogPolicy) -> Router {
    build_app_router(AppState::new(pool, test_config(policy)))
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Create a product through the API and return its id.
pub async fn create_product(pool: &PgPool, name: &str, price: f64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": name, "price": price}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
