use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{error::AppError, models::Seat, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(list_seats))
}

// GET /api/seats
pub async fn list_seats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Seat>>, AppError> {
    let seats = Seat::list_all(&state.db).await?;
    Ok(Json(seats))
}
