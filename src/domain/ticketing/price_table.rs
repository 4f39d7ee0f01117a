//! Unit prices per ticket type.
//!
//! Prices are fixed-point amounts in minor units (hundredths of a whole
//! currency unit). Totals are computed exactly and only truncated to whole
//! units at the very end, right before charging.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::TicketType;

/// Minor units in one whole currency unit.
pub const MINOR_UNITS_PER_UNIT: u64 = 100;

static STANDARD_PRICES: Lazy<PriceTable> = Lazy::new(|| {
    PriceTable::empty()
        .with_price(TicketType::Adult, UnitPrice::from_whole_units(25))
        .with_price(TicketType::Child, UnitPrice::from_whole_units(15))
        .with_price(TicketType::Infant, UnitPrice::from_whole_units(0))
});

/// Price of a single ticket, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(u64);

impl UnitPrice {
    pub fn from_whole_units(units: u64) -> Self {
        Self(units.saturating_mul(MINOR_UNITS_PER_UNIT))
    }

    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }

    /// Price of `count` tickets, in minor units.
    pub fn times(&self, count: u32) -> u64 {
        self.0.saturating_mul(u64::from(count))
    }
}

impl std::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_UNIT,
            self.0 % MINOR_UNITS_PER_UNIT
        )
    }
}

/// Lookup table from ticket type to unit price.
///
/// A table may leave types unpriced; purchasing an unpriced type is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<TicketType, UnitPrice>,
}

impl PriceTable {
    /// The standard venue prices: ADULT 25, CHILD 15, INFANT 0.
    ///
    /// Built once per process and shared read-only.
    pub fn standard() -> &'static PriceTable {
        &STANDARD_PRICES
    }

    /// A table with no prices defined.
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Builder: set (or replace) the price of a ticket type.
    pub fn with_price(mut self, ticket_type: TicketType, price: UnitPrice) -> Self {
        self.prices.insert(ticket_type, price);
        self
    }

    /// Builder: remove the price of a ticket type.
    pub fn without_price(mut self, ticket_type: TicketType) -> Self {
        self.prices.remove(&ticket_type);
        self
    }

    pub fn price_of(&self, ticket_type: TicketType) -> Option<UnitPrice> {
        self.prices.get(&ticket_type).copied()
    }

    pub fn is_priced(&self, ticket_type: TicketType) -> bool {
        self.prices.contains_key(&ticket_type)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
