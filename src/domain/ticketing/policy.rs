//! Purchase eligibility rules.
//!
//! Pure domain service: turns a raw purchase request into a validated
//! [`PurchasePlan`] or the first rule it breaks. Rules are checked in a
//! fixed order:
//!
//! 1. account ID is positive
//! 2. at least one request
//! 3. total tickets within the limit
//! 4. at least one adult
//! 5. every requested type has a price

use tracing::warn;

use super::{InvalidPurchaseError, PriceTable, TicketTotals, TicketType, TicketTypeRequest};
use crate::domain::foundation::AccountId;

/// Maximum number of tickets a single purchase may contain.
pub const MAX_TICKETS: u32 = 25;

/// Limits applied to every purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchasePolicy {
    max_tickets: u32,
}

/// A purchase that passed every rule and is ready to be charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePlan {
    pub account_id: AccountId,
    pub totals: TicketTotals,
    /// Whole currency units to charge.
    pub amount_due: u64,
    pub seats_to_reserve: u32,
}

impl PurchasePolicy {
    pub fn new(max_tickets: u32) -> Self {
        Self { max_tickets }
    }

    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    pub fn evaluate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
        prices: &PriceTable,
    ) -> Result<PurchasePlan, InvalidPurchaseError> {
        let account_id = AccountId::new(account_id).map_err(|_| {
            warn!(account_id, "Account ID must be greater than zero");
            InvalidPurchaseError::InvalidAccount(account_id)
        })?;

        if requests.is_empty() {
            warn!(%account_id, no_of_requests = 0, "No ticket requests supplied");
            return Err(InvalidPurchaseError::EmptyRequest);
        }

        let totals = TicketTotals::aggregate(requests);

        if totals.total_tickets() > self.max_tickets {
            warn!(
                %account_id,
                total_tickets = totals.total_tickets(),
                max_tickets = self.max_tickets,
                "Ticket limit exceeded"
            );
            return Err(InvalidPurchaseError::MaxLimitExceeded(self.max_tickets));
        }

        if !totals.has_adult() {
            warn!(
                %account_id,
                child_tickets = totals.count_of(TicketType::Child),
                infant_tickets = totals.count_of(TicketType::Infant),
                "No adult ticket in purchase"
            );
            return Err(InvalidPurchaseError::NoAdultAccompany);
        }

        let amount_due = totals.amount_due(prices).map_err(|err| {
            if let InvalidPurchaseError::PriceUndefined(ticket_type) = &err {
                warn!(%account_id, ticket_type = %ticket_type, "No price for ticket type");
            }
            err
        })?;
        let seats_to_reserve = totals.seats_to_reserve();

        Ok(PurchasePlan {
            account_id,
            totals,
            amount_due,
            seats_to_reserve,
        })
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self::new(MAX_TICKETS)
    }
}
