use std::sync::Arc;

use goldenpath_core::dataset::ProblemSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only and behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Problem dataset, injected at construction.
    pub problems: Arc<dyn ProblemSource>,
}

impl AppState {
    pub fn new(config: ServerConfig, problems: Arc<dyn ProblemSource>) -> Self {
        Self {
            config: Arc::new(config),
            problems,
        }
    }
}
