use std::sync::Arc;

use crate::interpret::Interpreter;
use crate::llm_client::CompletionGateway;
use crate::progress::ProgressStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion gateway. Default: GeminiClient.
    pub llm: Arc<dyn CompletionGateway>,
    pub interpreter: Interpreter,
    /// Progress history. Default: InMemoryProgressStore (lost on restart).
    pub progress: Arc<dyn ProgressStore>,
}
