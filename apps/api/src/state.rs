use std::sync::Arc;

use crate::config::Config;
use crate::query::jd_parser::JdExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable JD extractor. Default: HeuristicExtractor.
    pub extractor: Arc<dyn JdExtractor>,
}
