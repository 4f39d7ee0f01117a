//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod purchase;

pub use purchase::{PurchaseError, PurchaseReceipt, PurchaseTicketsCommand, PurchaseTicketsHandler};
