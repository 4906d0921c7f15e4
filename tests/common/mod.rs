#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use event_booking::config::Config;
use event_booking::AppState;

/// Роутер со свежим каталогом и тестовой конфигурацией.
pub fn build_test_app() -> (Router, Arc<AppState>) {
    build_test_app_with(Config::default())
}

pub fn build_test_app_with(config: Config) -> (Router, Arc<AppState>) {
    let state = AppState::new(config);
    (event_booking::app(state.clone()), state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn book(app: Router, event_id: Value, name: &str, email: &str) -> (StatusCode, Value) {
    let response = post_json(
        app,
        "/book",
        serde_json::json!({ "eventId": event_id, "name": name, "email": email }),
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn seats(state: &AppState, event_id: i64) -> u32 {
    state.catalog.lock().await.get(event_id).unwrap().available_seats
}
