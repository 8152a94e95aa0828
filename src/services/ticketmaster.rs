//! ticketmaster.rs
//!
//! Клиент Ticketmaster Discovery API. Делает один GET на `/events.json`
//! с ключом доступа и поисковым словом, разбирает ответ и отдаёт
//! упрощённые записи `Event`. Без повторов и без кеша: каждый вызов
//! идёт в апстрим.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{config::TicketmasterConfig, models::Event};

/// Ошибки при обращении к апстриму.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Сетевая ошибка или таймаут.
    #[error("events API unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    /// Апстрим ответил не-2xx статусом.
    #[error("events API returned status {0}")]
    Status(StatusCode),
    /// Тело ответа не является ожидаемым JSON-объектом.
    #[error("events API returned malformed body: {0}")]
    Malformed(#[source] serde_json::Error),
    /// Тело разобралось, но верхний уровень не объект.
    #[error("events API returned a non-object body")]
    NotAnObject,
}

/// Клиент для поиска концертов.
#[derive(Clone)]
pub struct TicketmasterClient {
    /// Базовый URL Discovery API (без `/events.json`).
    base_url: String,
    /// Секретный ключ, передаётся как `apikey`.
    api_key: String,
    http_client: reqwest::Client,
}

impl TicketmasterClient {
    /// Создаёт клиент на основе настроек приложения.
    pub fn from_config(config: &TicketmasterConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }

    /// Ищет события по ключевому слову.
    pub async fn search_events(&self, keyword: &str) -> Result<Vec<Event>, UpstreamError> {
        let url = format!("{}/events.json", self.base_url);
        info!("Searching Ticketmaster events: keyword={}", keyword);

        let response = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("keyword", keyword)])
            .send()
            .await
            .map_err(|e| {
                error!("Ticketmaster request failed: {:?}", e);
                UpstreamError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Ticketmaster responded with status {}", status);
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read Ticketmaster response body: {:?}", e);
            UpstreamError::Transport(e)
        })?;

        let parsed: Value = serde_json::from_slice(&body).map_err(|e| {
            error!("Ticketmaster response is not valid JSON: {}", e);
            UpstreamError::Malformed(e)
        })?;

        let events = Event::list_from_search(&parsed).ok_or_else(|| {
            error!("Ticketmaster response is not a JSON object");
            UpstreamError::NotAnObject
        })?;
        info!("Ticketmaster returned {} events", events.len());
        Ok(events)
    }
}
