//! Configuration loading and constants.
//!
//! Configuration is read once from the process environment at startup and is
//! immutable afterwards. Only two variables are recognised: `APP_VERSION` and
//! `NODE_ENV`. The listening port is fixed.

use std::net::SocketAddr;

// =============================================================================
// HTTP Server
// =============================================================================

/// Interface the server binds to (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server listens on. Not configurable through the environment.
pub const DEFAULT_PORT: u16 = 3000;

/// Responses embed a per-request timestamp or a liveness answer; neither may be cached.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Environment Variables
// =============================================================================

pub const APP_VERSION_VAR: &str = "APP_VERSION";
pub const ENVIRONMENT_VAR: &str = "NODE_ENV";

pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "hello_app=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Values reported by the greeting route
    pub app: AppInfo,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Version and environment reported to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub version: String,
    pub environment: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            version: DEFAULT_APP_VERSION.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// Structured JSON, one object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// A variable that is present but empty counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            http: HttpServerConfig::default(),
            app: AppInfo {
                version: var(APP_VERSION_VAR, DEFAULT_APP_VERSION),
                environment: var(ENVIRONMENT_VAR, DEFAULT_ENVIRONMENT),
            },
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Validation(String),
}
