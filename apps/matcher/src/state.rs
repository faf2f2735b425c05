use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::{FitScorer, WeightedFitScorer};
use crate::models::request::MatchOptions;

/// Shared state handed to every command and batch task.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable fit scorer. Default: WeightedFitScorer over the built-in taxonomy.
    pub scorer: Arc<dyn FitScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(WeightedFitScorer::default()),
        }
    }

    /// Request-supplied options win; otherwise the configured defaults apply.
    pub fn options_for(&self, requested: Option<&MatchOptions>) -> MatchOptions {
        requested
            .cloned()
            .unwrap_or_else(|| self.config.match_options())
    }
}
