use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub ticketmaster: TicketmasterConfig,
    pub cors: CorsConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Настройки Ticketmaster Discovery API
#[derive(Clone, Deserialize)]
pub struct TicketmasterConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_keyword: Option<String>,
    pub timeout_seconds: u64,
}

// Ключ не попадает в логи
impl fmt::Debug for TicketmasterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketmasterConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_keyword", &self.default_keyword)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

// Разрешённые источники для CORS
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "5000")?,
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "concert_api=debug,tower_http=debug".to_string()),
                log_format: parse_log_format(
                    &env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
                )?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://db.sqlite3".to_string()),
                pool_size: parse_var("DB_POOL_SIZE", "5")?,
            },
            ticketmaster: TicketmasterConfig {
                api_key: non_empty_var("TICKETMASTER_API_KEY")
                    .ok_or(ConfigError::Missing("TICKETMASTER_API_KEY"))?,
                base_url: env::var("TICKETMASTER_BASE_URL")
                    .unwrap_or_else(|_| "https://app.ticketmaster.com/discovery/v2".to_string()),
                default_keyword: non_empty_var("TICKETMASTER_DEFAULT_KEYWORD"),
                timeout_seconds: parse_var("TICKETMASTER_TIMEOUT_SECS", "10")?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(
                    &env::var("CORS_ALLOWED_ORIGINS")
                        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string()),
                ),
            },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            name: "LOG_FORMAT",
            value: value.to_string(),
        }),
    }
}

// Список через запятую, пустые элементы отбрасываются
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}
