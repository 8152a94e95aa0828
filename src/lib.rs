pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use services::ticketmaster::TicketmasterClient;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub ticketmaster: TicketmasterClient,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;
        info!("Database connected");

        db.bootstrap().await?;

        let ticketmaster = TicketmasterClient::from_config(&config.ticketmaster)?;

        Ok(Arc::new(Self {
            db,
            config,
            ticketmaster,
        }))
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = middleware::cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(home))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Concert API homepage" }))
}
