use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when GROQ_API_KEY is not configured; generation requests then
    /// fail with a 500 before any upstream call is attempted.
    pub llm: Option<Arc<dyn CompletionBackend>>,
    pub config: Config,
}
