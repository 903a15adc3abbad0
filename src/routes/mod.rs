//! HTTP route handlers.
//!
//! Two routes are served: the greeting at `/` and the liveness probe at
//! `/health`. Paths match case-insensitively and tolerate one trailing slash.
//! Anything else, including an unsupported method on a known path, answers 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::{normalize_path, request_id_layer};
use crate::state::AppState;

/// Unsupported methods on known paths are reported as missing routes.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with both routes and their cache headers.
pub fn create_router(state: AppState) -> Router {
    // Matched responses only; 404s carry no Cache-Control
    let routes = Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route_layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    // Layers on a Router run after route matching, so the routes are served
    // as a fallback service behind the path rewrite.
    Router::new()
        .fallback_service(routes)
        .layer(middleware::map_request(normalize_path))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
