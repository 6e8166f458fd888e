use std::sync::Arc;

use crate::content::catalog::Catalog;
use crate::llm_client::ChatProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Chat backend. Default: `LlmClient`; tests swap in stubs.
    pub chat: Arc<dyn ChatProvider>,
    /// Lesson table, parsed once at startup.
    pub catalog: Arc<Catalog>,
}
