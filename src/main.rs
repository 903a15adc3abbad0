//! hello-app entry point.
//!
//! Initializes tracing, reads configuration from the environment, sets up the
//! Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_app::config::{LogFormat, DEFAULT_LOG_FILTER};
use hello_app::{create_router, http, AppConfig, AppError, AppState};

/// hello-app: reports its version and environment over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-app", version, about)]
struct Args {
    /// Log level filter (e.g., "hello_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = AppConfig::from_env();

    // Log filter priority: CLI > env > default
    config.logging.filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    config.logging.format = args.log_format;

    let json = config.logging.format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!(
        version = %config.app.version,
        environment = %config.app.environment,
        "Loaded configuration"
    );

    let addr = config.http.addr()?;
    let state = AppState::new(config.app.clone());
    let app = create_router(state);

    if let Err(e) = http::start_server(app, addr, &config.app).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
