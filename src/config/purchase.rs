//! Purchase rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ticketing::{PurchasePolicy, MAX_TICKETS};

/// Purchase limits
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseConfig {
    /// Maximum tickets in a single purchase
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,
}

fn default_max_tickets() -> u32 {
    MAX_TICKETS
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets: default_max_tickets(),
        }
    }
}

impl PurchaseConfig {
    /// Build the purchase policy from this configuration
    pub fn policy(&self) -> PurchasePolicy {
        PurchasePolicy::new(self.max_tickets)
    }

    /// Validate purchase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_tickets == 0 {
            return Err(ValidationError::InvalidTicketLimit);
        }
        Ok(())
    }
}
