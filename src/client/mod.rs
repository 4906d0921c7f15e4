//! HTTP-клиент к API бронирования и всё, что нужно терминальному фронтенду:
//! валидация формы бронирования и отрисовка карточек событий.

pub mod form;
pub mod render;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::models::{BookingResponse, Event, MessageResponse};

pub use form::BookingForm;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ответ API с кодом ошибки; `message` берётся из тела ответа.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            ClientError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookPayload<'a> {
    event_id: i64,
    name: &'a str,
    email: &'a str,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    // GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let url = format!("{}/events", self.base_url);
        let response = self.http.get(&url).send().await?;
        handle_response(response, "Failed to load events").await
    }

    // POST /book
    pub async fn book(&self, event_id: i64, form: &BookingForm) -> Result<BookingResponse, ClientError> {
        let payload = BookPayload {
            event_id,
            name: &form.name,
            email: &form.email,
        };
        self.post("/book", &payload, "Booking failed").await
    }

    // POST /reset
    pub async fn reset(&self) -> Result<MessageResponse, ClientError> {
        self.post("/reset", &serde_json::json!({}), "Reset failed").await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        handle_response(response, fallback).await
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        // сервер отдаёт { "message": ... }; если тело другое, показываем общий текст
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback.to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.json().await?;
    Ok(body)
}
