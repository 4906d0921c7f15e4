use serde::Deserialize;
use std::env;
use std::str::FromStr;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
    pub cors: CorsConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

// Настройки каталога событий
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Искусственная задержка ответа GET /events (мс), чтобы клиент видел состояние загрузки.
    pub list_delay_ms: u64,
}

// Настройки CORS
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Пустой список означает "любой origin".
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "3001", "port number")?,
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "event_booking=debug,tower_http=debug".to_string()),
                log_format: match env::var("LOG_FORMAT").as_deref() {
                    Ok("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
            },
            catalog: CatalogConfig {
                list_delay_ms: parse_var("EVENTS_DELAY_MS", "0", "number of milliseconds")?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(
                    &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
                ),
            },
        })
    }
}

impl Default for Config {
    // Конфигурация для тестов и локального запуска без окружения
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 3001,
                environment: "development".to_string(),
                rust_log: "event_booking=debug,tower_http=debug".to_string(),
                log_format: LogFormat::Pretty,
            },
            catalog: CatalogConfig { list_delay_ms: 0 },
            cors: CorsConfig { allowed_origins: Vec::new() },
        }
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, expected, value })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "*")
        .map(|s| s.to_string())
        .collect()
}
