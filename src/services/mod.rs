pub mod catalog;

pub use catalog::{BookingReceipt, EventCatalog};
