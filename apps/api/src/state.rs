use std::sync::Arc;

use crate::config::Config;
use crate::gateway::ModelGateway;
use crate::pdf::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// `GeminiGateway` when a key is configured, `UnavailableGateway` otherwise.
    pub gateway: Arc<dyn ModelGateway>,
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}
