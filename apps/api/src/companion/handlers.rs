//! Axum route handler for the Companion API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::companion::prompts::{
    ARCHITECTURE_SYSTEM, CODE_EXPLANATION_SYSTEM, CODE_REVIEW_SYSTEM, COMPANION_PROMPT_TEMPLATE,
    DEBUG_HELP_SYSTEM, GENERAL_SYSTEM, LEARNING_SYSTEM,
};
use crate::errors::AppError;
use crate::state::AppState;

/// Conversation mode selected by the client. Unknown modes fall back to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationType {
    CodeReview,
    DebugHelp,
    CodeExplanation,
    Architecture,
    Learning,
    #[default]
    General,
}

impl ConversationType {
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("code-review") => ConversationType::CodeReview,
            Some("debug-help") => ConversationType::DebugHelp,
            Some("code-explanation") => ConversationType::CodeExplanation,
            Some("architecture") => ConversationType::Architecture,
            Some("learning") => ConversationType::Learning,
            _ => ConversationType::General,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            ConversationType::CodeReview => CODE_REVIEW_SYSTEM,
            ConversationType::DebugHelp => DEBUG_HELP_SYSTEM,
            ConversationType::CodeExplanation => CODE_EXPLANATION_SYSTEM,
            ConversationType::Architecture => ARCHITECTURE_SYSTEM,
            ConversationType::Learning => LEARNING_SYSTEM,
            ConversationType::General => GENERAL_SYSTEM,
        }
    }
}

/// Builds the full prompt: mode preamble followed by the developer's message.
pub fn build_prompt(conversation_type: ConversationType, message: &str) -> String {
    COMPANION_PROMPT_TEMPLATE
        .replace("{system}", conversation_type.system_prompt())
        .replace("{message}", message)
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionResponse {
    pub response: String,
    /// Echoes the requested mode, or `"general"` when none was given.
    pub conversation_type: String,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/companion
///
/// Answers a single developer question in the requested conversation mode.
pub async fn handle_companion(
    State(state): State<AppState>,
    Json(request): Json<CompanionRequest>,
) -> Result<Json<CompanionResponse>, AppError> {
    let message = request
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let llm = state.require_llm()?;

    let conversation_type = ConversationType::from_key(request.conversation_type.as_deref());
    let prompt = build_prompt(conversation_type, message);

    let text = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::from_llm(e, "Failed to generate response. Please try again."))?;

    info!("Companion reply generated ({conversation_type:?})");

    Ok(Json(CompanionResponse {
        response: text.trim().to_string(),
        conversation_type: request
            .conversation_type
            .unwrap_or_else(|| "general".to_string()),
        timestamp: Utc::now(),
    }))
}
