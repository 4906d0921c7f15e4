use axum::{
    extract::{FromRequest, Request},
    http::{header, HeaderValue, Method},
    Json,
};
use serde::de::DeserializeOwned;
use tower_http::cors::{AllowOrigin, CorsLayer};
use validator::Validate;

use crate::{config::CorsConfig, error::BookingError};

/// JSON-тело, прошедшее валидацию.
///
/// Некорректный JSON отклоняется как `MalformedBody`, незаполненные
/// обязательные поля как `MissingField`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BookingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| BookingError::MalformedBody(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            tracing::debug!("Request validation failed: {}", errors);
            BookingError::MissingField
        })?;

        Ok(ValidatedJson(value))
    }
}

// CORS: пустой список origin-ов = разрешаем всех
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
