use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelGateway;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Model gateway. Default: `LlmClient` against Groq.
    pub llm: Arc<dyn ModelGateway>,
    /// Plain HTTP client for third-party identity checks (Google sign-in).
    pub http: reqwest::Client,
    pub config: Config,
}
