//! hello-app: a minimal HTTP service.
//!
//! Serves a greeting reporting the version and environment resolved at
//! startup, plus a liveness probe.

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
