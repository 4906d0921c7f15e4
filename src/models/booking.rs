use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::BookingError;
use crate::models::Event;

/// eventId приходит числом, строкой или чем угодно ещё.
/// Разбор повторяет parseInt: берётся ведущая целая часть.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EventIdInput {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl EventIdInput {
    fn is_blank(&self) -> bool {
        match self {
            EventIdInput::Number(n) => n.as_f64() == Some(0.0),
            EventIdInput::Text(s) => s.is_empty(),
            EventIdInput::Other(value) => matches!(value, serde_json::Value::Null | serde_json::Value::Bool(false)),
        }
    }

    /// Числовой идентификатор; None, если значение не начинается с целого числа.
    pub fn resolve(&self) -> Option<i64> {
        match self {
            EventIdInput::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            }),
            EventIdInput::Text(s) => leading_integer(s),
            EventIdInput::Other(_) => None,
        }
    }
}

// "12abc" -> 12, " -3.5" -> -3, "abc" -> None
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits]).parse().ok()
}

// POST /book
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_event_id"))]
pub struct BookRequest {
    #[serde(default)]
    pub event_id: Option<EventIdInput>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

fn validate_event_id(req: &BookRequest) -> Result<(), ValidationError> {
    match &req.event_id {
        Some(id) if !id.is_blank() => Ok(()),
        _ => Err(ValidationError::new("required")),
    }
}

impl BookRequest {
    /// Превращает провалидированный запрос в команду для каталога.
    pub fn into_new_booking(self) -> Result<NewBooking, BookingError> {
        let (Some(event_id), Some(name), Some(email)) = (self.event_id, self.name, self.email) else {
            return Err(BookingError::MissingField);
        };
        // нечисловой id не может совпасть ни с одним событием
        let event_id = event_id.resolve().ok_or(BookingError::EventNotFound)?;

        Ok(NewBooking { event_id, name, email })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub event_id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub ticket_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
    pub updated_event: Event,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

const TICKET_ID_LEN: usize = 9;

// Непрозрачный идентификатор билета: 9 символов из случайного UUID v4
pub fn generate_ticket_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(TICKET_ID_LEN);
    id
}
