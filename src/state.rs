//! Shared application state for request handlers.

use std::sync::Arc;

use crate::clock::DeployClock;
use crate::config::AppInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// The reported version and environment are read once at startup and never
/// change. The clock is the only interior state and is lock-free.
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<AppInfo>,
    pub clock: Arc<DeployClock>,
}

impl AppState {
    /// Creates a new application state from the resolved startup values.
    pub fn new(info: AppInfo) -> Self {
        Self {
            info: Arc::new(info),
            clock: Arc::new(DeployClock::new()),
        }
    }
}
