//! Ticket pricing configuration

use serde::Deserialize;

use crate::domain::ticketing::{PriceTable, TicketType, UnitPrice};

/// Unit prices in minor units (hundredths of a currency unit)
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_adult")]
    pub adult_minor_units: u64,

    #[serde(default = "default_child")]
    pub child_minor_units: u64,

    #[serde(default = "default_infant")]
    pub infant_minor_units: u64,
}

fn default_adult() -> u64 {
    2500
}

fn default_child() -> u64 {
    1500
}

fn default_infant() -> u64 {
    0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adult_minor_units: default_adult(),
            child_minor_units: default_child(),
            infant_minor_units: default_infant(),
        }
    }
}

impl PricingConfig {
    /// Build the price table from this configuration
    pub fn price_table(&self) -> PriceTable {
        PriceTable::empty()
            .with_price(TicketType::Adult, UnitPrice::from_minor_units(self.adult_minor_units))
            .with_price(TicketType::Child, UnitPrice::from_minor_units(self.child_minor_units))
            .with_price(TicketType::Infant, UnitPrice::from_minor_units(self.infant_minor_units))
    }
}
