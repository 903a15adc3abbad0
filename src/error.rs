use crate::config::ConfigError;
use crate::http::ServerError;

/// Top-level failure of the process. Request handling itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
