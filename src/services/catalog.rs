//! catalog.rs
//!
//! Каталог событий и учёт бронирований в памяти процесса.
//!
//! Каталог владеет списком событий и множеством email-ов по каждому событию.
//! Все проверки бронирования (событие существует, есть места, email ещё не
//! бронировал) выполняются внутри одного вызова `book`, поэтому под общим
//! мьютексом из `AppState` бронирование атомарно.

use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::error::BookingError;
use crate::models::{booking::generate_ticket_id, seed_events, Booking, Event, NewBooking};

/// Результат успешного бронирования.
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub updated_event: Event,
}

#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
    /// event_id -> email-ы, уже забронировавшие это событие
    bookings: HashMap<i64, HashSet<String>>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::with_events(seed_events())
    }
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            bookings: HashMap::new(),
        }
    }

    /// Все события в порядке добавления.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, event_id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn has_booked(&self, event_id: i64, email: &str) -> bool {
        self.bookings
            .get(&event_id)
            .is_some_and(|emails| emails.contains(email))
    }

    pub fn book(&mut self, request: &NewBooking) -> Result<BookingReceipt, BookingError> {
        if request.name.is_empty() || request.email.is_empty() {
            return Err(BookingError::MissingField);
        }

        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == request.event_id)
            .ok_or(BookingError::EventNotFound)?;

        if event.is_sold_out() {
            warn!(event_id = event.id, "Booking rejected: sold out");
            return Err(BookingError::SoldOut);
        }

        let emails = self.bookings.entry(event.id).or_default();
        if emails.contains(&request.email) {
            warn!(event_id = event.id, "Booking rejected: duplicate email");
            return Err(BookingError::DuplicateBooking);
        }

        event.available_seats -= 1;
        emails.insert(request.email.clone());

        let booking = Booking {
            event_id: event.id,
            name: request.name.clone(),
            email: request.email.clone(),
            ticket_id: generate_ticket_id(),
        };
        info!(
            event_id = event.id,
            ticket_id = %booking.ticket_id,
            seats_left = event.available_seats,
            "Booking created"
        );

        Ok(BookingReceipt {
            booking,
            updated_event: event.clone(),
        })
    }

    /// Возвращает места к начальным значениям и забывает все бронирования.
    pub fn reset(&mut self) {
        self.events = seed_events();
        self.bookings.clear();
        warn!("RESET: catalog restored to seed data");
    }
}
