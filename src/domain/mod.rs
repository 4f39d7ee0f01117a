//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ticketing` - Ticket types, prices, and purchase rules

pub mod foundation;
pub mod ticketing;
