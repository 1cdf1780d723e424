pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::companion::handlers::handle_companion;
use crate::events::handlers::handle_events;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;
use crate::summarize::handlers::handle_summarize;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI proxy routes
        .route("/api/companion", post(handle_companion))
        .route("/api/summarize", post(handle_summarize))
        .route("/api/roadmap", post(roadmap::handle_roadmap))
        // Roadmap progress
        .route(
            "/api/roadmap/progress/:technology",
            get(roadmap::handle_get_progress).delete(roadmap::handle_reset_progress),
        )
        .route(
            "/api/roadmap/progress/:technology/toggle",
            post(roadmap::handle_toggle_progress),
        )
        .route(
            "/api/roadmap/progress/:technology/summary",
            post(roadmap::handle_progress_summary),
        )
        // Events
        .route("/api/events", get(handle_events))
        .with_state(state)
}
