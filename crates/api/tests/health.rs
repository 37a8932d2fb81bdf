//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use catalog_api::router::REQUEST_ID_HEADER;
use common::{body_json, get, TEST_ORIGIN};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_catalog_policy(pool: PgPool) {
    let app = common::build_hard_delete_app(pool);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["visibility"], "all");
    assert_eq!(json["deletion"], "hard");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get(REQUEST_ID_HEADER);
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
    assert_eq!(request_id.unwrap().to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_request_id_is_echoed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "order-sync-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "order-sync-42");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

fn from_origin(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/v1/products")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn configured_origin_is_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app.oneshot(from_origin(TEST_ORIGIN)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], TEST_ORIGIN);
    let exposed = headers[header::ACCESS_CONTROL_EXPOSE_HEADERS]
        .to_str()
        .unwrap();
    assert!(exposed.contains(REQUEST_ID_HEADER));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unconfigured_origin_is_not_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(from_origin("http://localhost:5173"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_lists_catalog_methods(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/products/1")
        .header(header::ORIGIN, TEST_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
}
