pub mod event;
pub mod booking;

pub use event::{seed_events, Event};
pub use booking::{Booking, BookingResponse, BookRequest, EventIdInput, MessageResponse, NewBooking};
