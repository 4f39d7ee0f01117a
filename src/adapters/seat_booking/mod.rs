//! Seat booking adapters.
//!
//! Implementations of the `SeatReservationService` port.

mod in_memory_seat_reservation_service;

pub use in_memory_seat_reservation_service::{InMemorySeatReservationService, Reservation};
