//! Ticketing module - ticket types, prices, and purchase rules.
//!
//! # Module Organization
//!
//! - `ticket_type` - The closed set of ticket kinds
//! - `ticket_request` - A validated (type, count) pair
//! - `price_table` - Fixed-point unit prices per ticket type
//! - `totals` - Aggregation of requests into per-type counts and amounts
//! - `policy` - Ordered purchase eligibility rules
//! - `errors` - Rule violations with their public messages

mod errors;
mod policy;
mod price_table;
mod ticket_request;
mod ticket_type;
mod totals;

pub use errors::InvalidPurchaseError;
pub use policy::{PurchasePlan, PurchasePolicy, MAX_TICKETS};
pub use price_table::{PriceTable, UnitPrice, MINOR_UNITS_PER_UNIT};
pub use ticket_request::TicketTypeRequest;
pub use ticket_type::TicketType;
pub use totals::TicketTotals;
