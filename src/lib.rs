pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod controllers;
pub mod middleware;
#[cfg(feature = "client")]
pub mod client;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use services::EventCatalog;

// Shared state для всего приложения.
// Каталог живёт за одним мьютексом: бронирование = одна атомарная операция.
pub struct AppState {
    pub catalog: Mutex<EventCatalog>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Self::with_catalog(config, EventCatalog::new())
    }

    pub fn with_catalog(config: config::Config, catalog: EventCatalog) -> Arc<Self> {
        Arc::new(Self {
            catalog: Mutex::new(catalog),
            config,
        })
    }
}

/// Главный роутер со всеми слоями; его же используют интеграционные тесты.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = middleware::cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(|| async { "EventSure API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
