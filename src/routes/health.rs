//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! It does not inspect configuration or any other internal state.

/// Health check handler.
pub async fn health() -> &'static str {
    "OK"
}
