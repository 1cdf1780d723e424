//! Roadmap generation: live AI roadmap with retry, timeout and static fallback.
//!
//! Only an invalid credential is surfaced as an error. Every other failure mode
//! degrades to the pre-authored roadmap for the requested technology.

use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{backoff_delay, strip_json_fences, FailureKind, LlmError, TextGenerator};
use crate::roadmap::fallback::fallback_roadmap;
use crate::roadmap::models::{RoadmapStep, Technology, ROADMAP_LEN};
use crate::roadmap::prompts::{
    BUSY_MESSAGE, QUOTA_MESSAGE, ROADMAP_PROMPT_TEMPLATE, UNAVAILABLE_MESSAGE,
};

const MAX_ATTEMPTS: u32 = 3;
/// Upper bound for a single generation attempt.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a roadmap request that did not hard-fail.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapOutcome {
    pub roadmap: Vec<RoadmapStep>,
    /// Set when the static table was served because generation was unavailable.
    pub fallback: bool,
    pub message: Option<&'static str>,
}

impl RoadmapOutcome {
    fn generated(roadmap: Vec<RoadmapStep>) -> Self {
        Self {
            roadmap,
            fallback: false,
            message: None,
        }
    }

    fn degraded(technology: &str, message: Option<&'static str>) -> Self {
        Self {
            roadmap: fallback_roadmap(technology).to_vec(),
            fallback: true,
            message,
        }
    }
}

pub fn build_prompt(technology: &str, current_knowledge: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace(
            "{technology_name}",
            Technology::from_key_or_default(technology).display_name(),
        )
        .replace("{current_knowledge}", current_knowledge)
}

/// Parses model output into a roadmap. `None` unless it is a JSON array of exactly 3 steps.
pub fn parse_roadmap(text: &str) -> Option<Vec<RoadmapStep>> {
    match serde_json::from_str::<Vec<RoadmapStep>>(strip_json_fences(text)) {
        Ok(steps) if steps.len() == ROADMAP_LEN => Some(steps),
        Ok(steps) => {
            warn!("AI roadmap had {} steps, expected {ROADMAP_LEN}", steps.len());
            None
        }
        Err(e) => {
            warn!("Failed to parse AI roadmap JSON: {e}");
            None
        }
    }
}

/// Generates a roadmap, or degrades to the fallback table.
///
/// `llm = None` serves the fallback without a message. Each attempt is raced
/// against `ATTEMPT_TIMEOUT`; failed attempts back off 1s, 2s before retrying.
/// Malformed output is replaced by the fallback without flagging it.
pub async fn generate_roadmap(
    llm: Option<&dyn TextGenerator>,
    technology: &str,
    current_knowledge: &str,
) -> Result<RoadmapOutcome, AppError> {
    let Some(llm) = llm else {
        info!("No Gemini API key found, using fallback roadmap");
        return Ok(RoadmapOutcome::degraded(technology, None));
    };

    let prompt = build_prompt(technology, current_knowledge);
    let mut last_error = LlmError::EmptyContent;

    for attempt in 1..=MAX_ATTEMPTS {
        let result = match tokio::time::timeout(ATTEMPT_TIMEOUT, llm.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout),
        };

        let error = match result {
            Ok(text) => {
                let roadmap = parse_roadmap(&text)
                    .unwrap_or_else(|| fallback_roadmap(technology).to_vec());
                return Ok(RoadmapOutcome::generated(roadmap));
            }
            Err(e) => e,
        };

        warn!("Gemini roadmap attempt {attempt}/{MAX_ATTEMPTS} failed: {error}");

        if error.classify() == FailureKind::InvalidCredential {
            return Err(AppError::InvalidCredential);
        }

        last_error = error;
        if attempt < MAX_ATTEMPTS {
            tokio::time::sleep(backoff_delay(attempt)).await;
        }
    }

    let message = match last_error.classify() {
        FailureKind::Overloaded => BUSY_MESSAGE,
        FailureKind::QuotaExceeded => QUOTA_MESSAGE,
        FailureKind::InvalidCredential | FailureKind::Other => UNAVAILABLE_MESSAGE,
    };
    warn!("Serving fallback roadmap for {technology}: {last_error}");

    Ok(RoadmapOutcome::degraded(technology, Some(message)))
}
