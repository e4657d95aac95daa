use std::sync::Arc;

use crate::coaching::methodology::MethodologyCatalog;
use crate::llm_client::FeedbackService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The methodology catalog is built once at startup and read-only afterwards,
/// so concurrent handlers can share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub methodologies: Arc<MethodologyCatalog>,
    /// Pluggable completion backend. Production: `GeminiClient`; tests swap
    /// in a mock to exercise the failure paths.
    pub feedback: Arc<dyn FeedbackService>,
}
