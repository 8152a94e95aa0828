//! Ошибки HTTP-обработчиков.
//!
//! Каждый вариант превращается в JSON `{"code", "message"}` с понятным
//! машинным кодом; внутренний текст ошибки только логируется.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::ticketmaster::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    /// База недоступна или запрос к ней упал.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
    /// Апстрим недоступен, не ответил вовремя или вернул не-2xx.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] UpstreamError),
    /// Апстрим ответил телом, которое нельзя разобрать.
    #[error("upstream malformed: {0}")]
    UpstreamMalformed(#[source] UpstreamError),
    /// Не передано поисковое слово и нет значения по умолчанию.
    #[error("search keyword is required")]
    MissingKeyword,
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Malformed(_) | UpstreamError::NotAnObject => {
                AppError::UpstreamMalformed(err)
            }
            UpstreamError::Transport(_) | UpstreamError::Status(_) => {
                AppError::UpstreamUnavailable(err)
            }
        }
    }
}

/// Тело ответа с ошибкой.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnavailable(_) | AppError::UpstreamMalformed(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::MissingKeyword => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::UpstreamMalformed(_) => "UPSTREAM_MALFORMED",
            AppError::MissingKeyword => "MISSING_KEYWORD",
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            AppError::StorageUnavailable(_) => "Failed to read from storage",
            AppError::UpstreamUnavailable(_) => "Events provider is unavailable",
            AppError::UpstreamMalformed(_) => "Events provider returned an invalid response",
            AppError::MissingKeyword => "Query parameter 'keyword' is required",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, code = self.code(), error = %self, "Request failed");
        }

        let body = ErrorResponse {
            code: self.code(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
