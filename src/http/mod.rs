//! HTTP server module.
//!
//! Binds the listener, prints the startup banner and serves the router over
//! plain HTTP until Ctrl+C or SIGTERM triggers a graceful shutdown.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, startup_banner, ServerError};
pub use shutdown::shutdown_signal;
