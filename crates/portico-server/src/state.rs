//! Server state management

use crate::config::ServerConfig;
use std::sync::Arc;

/// Shared server state
///
/// Portico keeps no mutable state between requests; the only shared data is
/// the configuration, behind an `Arc` so cloning per request stays cheap.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new app state
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get configuration reference
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
