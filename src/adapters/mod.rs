//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `payment` - Payment gateway implementations
//! - `seat_booking` - Seat reservation implementations

pub mod payment;
pub mod seat_booking;

pub use payment::{Charge, MockTicketPaymentService};
pub use seat_booking::{InMemorySeatReservationService, Reservation};
