//! HTTP server startup logic.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppInfo;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Bind the TCP listener.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// The three lines written to stdout once the listener is bound.
pub fn startup_banner(port: u16, info: &AppInfo) -> [String; 3] {
    [
        format!("Node.js app listening at http://localhost:{}", port),
        format!("App Version: {}", info.version),
        format!("Environment: {}", info.environment),
    ]
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, addr: SocketAddr, info: &AppInfo) -> Result<(), ServerError> {
    let listener = bind(addr).await?;
    let local = listener.local_addr().unwrap_or(addr);

    for line in startup_banner(local.port(), info) {
        println!("{}", line);
    }
    tracing::info!(
        addr = %local,
        version = %info.version,
        environment = %info.environment,
        "Starting HTTP server"
    );

    serve(listener, app, shutdown::shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
