//! Purchase handlers.
//!
//! Command handler for buying tickets: validates the request, charges the
//! account, then reserves seats.

mod purchase_error;
mod purchase_tickets;

pub use purchase_error::PurchaseError;
pub use purchase_tickets::{PurchaseReceipt, PurchaseTicketsCommand, PurchaseTicketsHandler};
