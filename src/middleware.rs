//! Request middleware.
//!
//! - `request_id_layer` tags every request, 404s included, with a UUID v4 and
//!   runs it inside a `request` span so its logs can be correlated.
//! - `normalize_path` folds the request path the way the routes are matched:
//!   letters are compared case-insensitively and one trailing slash is ignored.

use std::borrow::Cow;
use std::time::Instant;

use axum::{
    extract::Request,
    http::{uri::PathAndQuery, Uri},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID, available to handlers through `Extension<RequestId>`.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Middleware that assigns a request ID and logs completion within its span.
///
/// Must be the outermost layer so the span also covers path normalization.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId(Uuid::new_v4());
    request.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    span.record("duration_ms", duration_ms);
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );
    });

    response
}

/// Canonical form of a request path: ASCII-lowercased, with a single trailing
/// slash removed. `/` and paths ending in `//` keep their trailing slash.
pub fn normalized_path(path: &str) -> Cow<'_, str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };

    if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Rewrites the request URI to its normalized path before routing.
pub async fn normalize_path(mut request: Request) -> Request {
    let uri = request.uri();
    let path = normalized_path(uri.path());
    if path == uri.path() {
        return request;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.into_owned(),
    };

    let mut parts = uri.clone().into_parts();
    match path_and_query.parse::<PathAndQuery>() {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(e) => {
            tracing::debug!(error = %e, "Leaving unnormalizable path as is");
            return request;
        }
    }

    match Uri::from_parts(parts) {
        Ok(normalized) => *request.uri_mut() = normalized,
        Err(e) => tracing::debug!(error = %e, "Leaving unnormalizable path as is"),
    }
    request
}
