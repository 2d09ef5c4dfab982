use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production.
    pub llm: Arc<dyn CompletionService>,
    pub exporter: Arc<dyn PdfExporter>,
    pub config: Config,
}
