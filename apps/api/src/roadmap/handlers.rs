//! Axum route handlers for the Roadmap and Progress APIs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::models::{subtopic_hours, RoadmapStep};
use crate::roadmap::progress::{ItemKind, ProgressData, ProgressSummary, ProgressTracker};
use crate::roadmap::store::is_valid_technology_key;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub current_knowledge: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub roadmap: Vec<RoadmapStep>,
    pub technology: String,
    pub current_knowledge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub kind: ItemKind,
    pub name: String,
    /// Topic hours; only read for subtopics.
    #[serde(default)]
    pub estimated_hours: u32,
    /// Number of subtopics in the topic; only read for subtopics.
    #[serde(default)]
    pub subtopic_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub completed: bool,
    pub progress: ProgressData,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub roadmap: Vec<RoadmapStep>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_technology(technology: &str) -> Result<(), AppError> {
    if is_valid_technology_key(technology) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid technology key: {technology}"
        )))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/roadmap
///
/// Generates a three-level learning roadmap, degrading to the static table when
/// generation is unavailable. Only invalid input and an invalid credential fail.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let (Some(technology), Some(current_knowledge)) = (
        non_blank(request.technology),
        non_blank(request.current_knowledge),
    ) else {
        return Err(AppError::Validation(
            "Technology and current knowledge are required".to_string(),
        ));
    };

    let outcome =
        generate_roadmap(state.llm.as_deref(), &technology, &current_knowledge).await?;

    info!(
        "Roadmap for {technology}: {} steps (fallback: {})",
        outcome.roadmap.len(),
        outcome.fallback
    );

    Ok(Json(RoadmapResponse {
        roadmap: outcome.roadmap,
        technology,
        current_knowledge,
        fallback: outcome.fallback.then_some(true),
        message: outcome.message.map(str::to_string),
    }))
}

/// GET /api/roadmap/progress/:technology
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path(technology): Path<String>,
) -> Result<Json<ProgressData>, AppError> {
    validate_technology(&technology)?;
    Ok(Json(state.progress.load(&technology).await?))
}

/// POST /api/roadmap/progress/:technology/toggle
///
/// Flips one item, updates the streak and study hours, and saves immediately.
pub async fn handle_toggle_progress(
    State(state): State<AppState>,
    Path(technology): Path<String>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    validate_technology(&technology)?;
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Item name is required".to_string()));
    }

    let hours = match request.kind {
        ItemKind::Subtopic => subtopic_hours(request.estimated_hours, request.subtopic_count),
        ItemKind::Skill | ItemKind::Resource => 0,
    };

    let mut tracker = ProgressTracker::new(state.progress.load(&technology).await?);
    let completed = tracker.toggle(request.kind, &request.name, hours, today());
    let progress = tracker.into_data();
    state.progress.save(&technology, &progress).await?;

    Ok(Json(ToggleResponse {
        completed,
        progress,
    }))
}

/// DELETE /api/roadmap/progress/:technology
pub async fn handle_reset_progress(
    State(state): State<AppState>,
    Path(technology): Path<String>,
) -> Result<StatusCode, AppError> {
    validate_technology(&technology)?;
    state.progress.clear(&technology).await?;
    info!("Progress reset for {technology}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/roadmap/progress/:technology/summary
///
/// Dashboard figures for the roadmap the client is displaying.
pub async fn handle_progress_summary(
    State(state): State<AppState>,
    Path(technology): Path<String>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<ProgressSummary>, AppError> {
    validate_technology(&technology)?;
    let tracker = ProgressTracker::new(state.progress.load(&technology).await?);
    Ok(Json(tracker.summary(&request.roadmap)))
}
