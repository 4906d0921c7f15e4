use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use std::time::Duration;

use crate::models::Event;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
}

// GET /events
pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<Vec<Event>> {
    let delay_ms = state.config.catalog.list_delay_ms;
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let catalog = state.catalog.lock().await;
    Json(catalog.list().to_vec())
}
