#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use concert_api::{
    build_router,
    config::{AppConfig, Config, CorsConfig, DatabaseConfig, LogFormat, TicketmasterConfig},
    AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub dir: TempDir,
}

pub fn test_config(database_url: String, base_url: &str, default_keyword: Option<&str>) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "concert_api=debug".to_string(),
            log_format: LogFormat::Text,
        },
        database: DatabaseConfig {
            url: database_url,
            pool_size: 2,
        },
        ticketmaster: TicketmasterConfig {
            api_key: API_KEY.to_string(),
            base_url: base_url.to_string(),
            default_keyword: default_keyword.map(str::to_string),
            timeout_seconds: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("db.sqlite3").display())
}

pub async fn spawn_app(base_url: &str, default_keyword: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(database_url(&dir), base_url, default_keyword);
    let state = AppState::new(config).await.unwrap();
    let router = build_router(state.clone());
    TestApp { router, state, dir }
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}
