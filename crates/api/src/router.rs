//! Application router and HTTP middleware.
//!
//! [`build_app_router`] is shared by the binary and the integration tests so
//! both exercise the same stack.

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id. A client-supplied value is kept.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Methods served under `/api/v1/products`.
const CATALOG_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

/// Build the application [`Router`]: `/health` at the root, the catalog under
/// `/api/v1`, wrapped in the middleware from [`with_middleware`].
pub fn build_app_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes());

    with_middleware(routes, &state.config).with_state(state)
}

/// Wrap `routes` in the HTTP middleware, outermost first:
///
/// 1. CORS, restricted to the configured origins
/// 2. Request id assignment
/// 3. Tracing span tagged with the request id
/// 4. Request id echo on the response
/// 5. Request timeout
/// 6. Panic recovery
fn with_middleware(routes: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    routes
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

/// CORS for browser clients of the catalog.
///
/// Only origins listed in `CORS_ORIGINS` are allowed; with none configured no
/// cross-origin request is granted. The request id header may be sent and is
/// readable by the caller.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layer = CorsLayer::new()
        .allow_methods(CATALOG_METHODS)
        .allow_headers([CONTENT_TYPE, request_id.clone()])
        .expose_headers([request_id])
        .max_age(Duration::from_secs(3600));

    if config.cors_origins.is_empty() {
        layer
    } else {
        layer.allow_origin(config.cors_origins.clone())
    }
}
