//! Ticket type definitions.

use serde::{Deserialize, Serialize};

/// Kind of ticket a purchaser can request.
///
/// Determines pricing and whether a seat is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Adult ticket. At least one is required per purchase.
    Adult,

    /// Child ticket. Gets its own seat.
    Child,

    /// Infant ticket. Sits on an adult's lap, no seat allocated.
    Infant,
}

impl TicketType {
    /// Every ticket type, in declaration order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Returns the upper-case name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }

    /// Returns true if a ticket of this type occupies a seat.
    pub fn requires_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
