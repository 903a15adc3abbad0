//! Greeting handler for the root path.
//!
//! Reports the version and environment resolved at startup together with the
//! time the response was built.

use axum::{extract::State, Extension};
use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::clock::iso8601;
use crate::config::AppInfo;
use crate::middleware::RequestId;
use crate::state::AppState;

pub const GREETING_PREFIX: &str = "Hello from Node.js App!";

/// Render the greeting body for a given instant.
pub fn greeting(info: &AppInfo, at: &DateTime<Utc>) -> String {
    format!(
        "{} Version: {}, Environment: {}. Deployed at: {}\n",
        GREETING_PREFIX,
        info.version,
        info.environment,
        iso8601(at)
    )
}

/// Root page handler.
#[instrument(name = "home::index", skip_all, fields(request_id = %request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> String {
    let now = state.clock.now();
    tracing::debug!(deployed_at = %now, "Rendering greeting");
    greeting(&state.info, &now)
}
