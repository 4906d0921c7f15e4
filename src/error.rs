use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::MessageResponse;

/// Ошибки бронирования. Каждая отдаётся клиенту как `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required fields")]
    MissingField,

    #[error("Event not found")]
    EventNotFound,

    #[error("Sold out")]
    SoldOut,

    #[error("This email has already booked a seat for this event.")]
    DuplicateBooking,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl BookingError {
    pub fn status(&self) -> StatusCode {
        match self {
            BookingError::EventNotFound => StatusCode::NOT_FOUND,
            BookingError::MissingField
            | BookingError::SoldOut
            | BookingError::DuplicateBooking
            | BookingError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
