//! Payment gateway adapters.
//!
//! Implementations of the `TicketPaymentService` port.

mod mock_ticket_payment_service;

pub use mock_ticket_payment_service::{Charge, MockTicketPaymentService};
