use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::{FailureKind, LlmError};
use crate::roadmap::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("Invalid API key configuration")]
    InvalidCredential,

    #[error("API quota exceeded")]
    QuotaExceeded,

    /// Upstream generation failure. `public` is the message shown to the caller.
    #[error("LLM error: {source}")]
    Llm {
        public: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps an upstream failure to the error surfaced by routes that do not retry.
    /// `public` is used for anything that is neither a credential nor a quota problem.
    pub fn from_llm(source: LlmError, public: &'static str) -> Self {
        match source.classify() {
            FailureKind::InvalidCredential => AppError::InvalidCredential,
            FailureKind::QuotaExceeded => AppError::QuotaExceeded,
            FailureKind::Overloaded | FailureKind::Other => AppError::Llm { public, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Gemini API key not configured".to_string(),
            ),
            AppError::InvalidCredential => {
                tracing::error!("Gemini rejected the configured API key");
                (
                    StatusCode::UNAUTHORIZED,
                    "Invalid API key configuration".to_string(),
                )
            }
            AppError::QuotaExceeded => {
                tracing::warn!("Gemini quota exhausted");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "API quota exceeded. Please try again later.".to_string(),
                )
            }
            AppError::Llm { public, source } => {
                tracing::error!("LLM error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
            AppError::Store(e) => {
                tracing::error!("Progress store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access saved progress".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, message: &str) -> LlmError {
        LlmError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validation_renders_bad_request() {
        let response = AppError::Validation("Text is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_configured_is_internal_error() {
        let response = AppError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_llm_api_key_maps_to_unauthorized() {
        let err = AppError::from_llm(api_error(400, "reason: API_KEY_INVALID"), "nope");
        assert!(matches!(err, AppError::InvalidCredential));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_from_llm_quota_maps_to_too_many_requests() {
        let err = AppError::from_llm(api_error(429, "check quota"), "nope");
        assert_eq!(err.into_response().status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_from_llm_other_keeps_public_message() {
        let err = AppError::from_llm(api_error(500, "boom"), "Failed to generate summary");
        match err {
            AppError::Llm { public, .. } => assert_eq!(public, "Failed to generate summary"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_overloaded_is_not_surfaced_as_its_own_status() {
        let err = AppError::from_llm(api_error(503, "The model is overloaded"), "x");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
