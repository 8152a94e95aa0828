use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AppError, models::Event, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tm-events", get(list_events))
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub keyword: Option<String>,
}

// GET /api/tm-events?keyword=...
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    // Слово из запроса, иначе из конфигурации
    let keyword = params
        .keyword
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(|| state.config.ticketmaster.default_keyword.clone())
        .ok_or(AppError::MissingKeyword)?;

    let events = state.ticketmaster.search_events(&keyword).await?;
    Ok(Json(events))
}
