use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use crate::{
    error::BookingError,
    middleware::ValidatedJson,
    models::{BookRequest, BookingResponse, MessageResponse},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", post(create_booking))
}

pub fn reset_route() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reset", post(reset_all_data))
}

/* ---------- BOOKINGS ---------- */

// POST /book
async fn create_booking(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<BookRequest>,
) -> Result<Json<BookingResponse>, BookingError> {
    let new_booking = req.into_new_booking()?;

    // проверка и списание места под одной блокировкой
    let receipt = state.catalog.lock().await.book(&new_booking)?;

    Ok(Json(BookingResponse {
        message: "Booking successful!".to_string(),
        booking: receipt.booking,
        updated_event: receipt.updated_event,
    }))
}

/* ---------- RESET ---------- */

// POST /reset
async fn reset_all_data(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.catalog.lock().await.reset();
    Json(MessageResponse::new("Data reset"))
}
