//! Aggregation of ticket requests into per-type totals.

use std::collections::BTreeMap;

use super::{InvalidPurchaseError, PriceTable, TicketType, TicketTypeRequest, MINOR_UNITS_PER_UNIT};

/// Summed ticket counts for one purchase.
///
/// Requests of the same type are added together, so the result does not
/// depend on the order the requests were given in. A type requested only
/// with a zero count is still present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketTotals {
    counts: BTreeMap<TicketType, u32>,
}

impl TicketTotals {
    pub fn aggregate(requests: &[TicketTypeRequest]) -> Self {
        let mut counts = BTreeMap::new();
        for request in requests {
            let count = counts.entry(request.ticket_type()).or_insert(0u32);
            *count = count.saturating_add(request.no_of_tickets());
        }
        Self { counts }
    }

    /// Summed count for a single type, zero if never requested.
    pub fn count_of(&self, ticket_type: TicketType) -> u32 {
        self.counts.get(&ticket_type).copied().unwrap_or(0)
    }

    pub fn total_tickets(&self) -> u32 {
        self.counts
            .values()
            .fold(0u32, |total, count| total.saturating_add(*count))
    }

    pub fn infant_tickets(&self) -> u32 {
        self.count_of(TicketType::Infant)
    }

    pub fn seats_to_reserve(&self) -> u32 {
        self.counts
            .iter()
            .filter(|(ticket_type, _)| ticket_type.requires_seat())
            .fold(0u32, |total, (_, count)| total.saturating_add(*count))
    }

    pub fn has_adult(&self) -> bool {
        self.count_of(TicketType::Adult) > 0
    }

    /// Requested types with their summed counts, in a stable order.
    pub fn line_items(&self) -> impl Iterator<Item = (TicketType, u32)> + '_ {
        self.counts.iter().map(|(ticket_type, count)| (*ticket_type, *count))
    }

    /// Total price in whole currency units, rounded down.
    ///
    /// Fails on the first requested type the table has no price for.
    pub fn amount_due(&self, prices: &PriceTable) -> Result<u64, InvalidPurchaseError> {
        let mut minor_units = 0u64;
        for (ticket_type, count) in self.line_items() {
            let price = prices
                .price_of(ticket_type)
                .ok_or(InvalidPurchaseError::PriceUndefined(ticket_type))?;
            minor_units = minor_units.saturating_add(price.times(count));
        }
        Ok(minor_units / MINOR_UNITS_PER_UNIT)
    }
}
