use std::sync::Arc;

use crate::analysis::EngineOptions;
use crate::config::Config;
use crate::github_client::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Profile source for GitHub analysis. Default: GitHubClient against the public API.
    pub profiles: Arc<dyn ProfileSource>,
    /// Match mode and jitter shared by every responder.
    pub engine: EngineOptions,
}

impl AppState {
    pub fn new(config: Config, profiles: Arc<dyn ProfileSource>) -> Self {
        let engine = EngineOptions::from_config(&config);
        Self {
            config,
            profiles,
            engine,
        }
    }
}
