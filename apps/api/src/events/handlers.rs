use axum::{extract::Query, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::events::{upcoming_events, TechEvent, DEFAULT_CITY};

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub city: String,
    pub events: Vec<TechEvent>,
}

/// GET /api/events?city=
pub async fn handle_events(Query(query): Query<EventsQuery>) -> Json<EventsResponse> {
    let city = query
        .city
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    let events = upcoming_events(&city, Local::now().date_naive());
    Json(EventsResponse { city, events })
}
