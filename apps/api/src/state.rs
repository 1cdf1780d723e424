use std::sync::Arc;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::roadmap::store::ProgressStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Live text generation. `None` when no credential is configured.
    pub llm: Option<Arc<dyn TextGenerator>>,
    /// Roadmap progress persistence. File-backed by default, Redis when configured.
    pub progress: Arc<dyn ProgressStore>,
}

impl AppState {
    /// The configured generator, or `NotConfigured` for routes that cannot degrade.
    pub fn require_llm(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm.as_deref().ok_or(AppError::NotConfigured)
    }
}
