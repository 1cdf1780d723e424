//! Axum route handler for the Summarize API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::summarize::prompts::SUMMARIZE_PROMPT_TEMPLATE;

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    /// Percentage reduction in characters. Negative when the summary is longer.
    pub compression_ratio: i64,
}

/// `round((1 - summary / original) * 100)`, 0 for an empty original.
pub fn compression_ratio(original_length: usize, summary_length: usize) -> i64 {
    if original_length == 0 {
        return 0;
    }
    ((1.0 - summary_length as f64 / original_length as f64) * 100.0).round() as i64
}

/// POST /api/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let text = request
        .text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Text is required".to_string()))?;

    let llm = state.require_llm()?;

    let prompt = SUMMARIZE_PROMPT_TEMPLATE.replace("{text}", text);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::from_llm(e, "Failed to generate summary. Please try again."))?;

    let summary = raw.trim().to_string();
    let original_length = text.chars().count();
    let summary_length = summary.chars().count();

    info!("Summarized {original_length} chars into {summary_length}");

    Ok(Json(SummarizeResponse {
        compression_ratio: compression_ratio(original_length, summary_length),
        summary,
        original_length,
        summary_length,
    }))
}
