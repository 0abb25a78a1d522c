use std::sync::Arc;

use crate::civic::CivicClient;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Zip-keyed representative documents. Trait object so handler tests
    /// can run against an in-memory store.
    pub store: Arc<dyn DocumentStore>,
    pub llm: LlmClient,
    pub civic: CivicClient,
    pub config: Config,
}
