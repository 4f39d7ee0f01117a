//! Ticket type request value object.

use serde::{Deserialize, Serialize};

use super::TicketType;
use crate::domain::foundation::ValidationError;

/// Immutable request for a number of tickets of one type.
///
/// The count can never be negative; construction fails eagerly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

#[derive(Deserialize)]
struct RawTicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: i64,
}

impl TicketTypeRequest {
    /// Creates a request, rejecting negative counts.
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> Result<Self, ValidationError> {
        let no_of_tickets = u32::try_from(no_of_tickets).map_err(|_| {
            ValidationError::out_of_range("no_of_tickets", 0, i64::from(u32::MAX), no_of_tickets)
        })?;
        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = ValidationError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        Self::new(raw.ticket_type, raw.no_of_tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_counts() {
        assert_eq!(
            TicketTypeRequest::new(TicketType::Adult, 0).unwrap().no_of_tickets(),
            0
        );
        let request = TicketTypeRequest::new(TicketType::Child, 3).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Child);
        assert_eq!(request.no_of_tickets(), 3);
    }

    #[test]
    fn rejects_negative_count() {
        let err = TicketTypeRequest::new(TicketType::Infant, -1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: -1, .. }));
    }

    #[test]
    fn rejects_count_beyond_u32() {
        assert!(TicketTypeRequest::new(TicketType::Adult, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn deserializes_valid_request() {
        let request: TicketTypeRequest =
            serde_json::from_str(r#"{"ticket_type":"ADULT","no_of_tickets":2}"#).unwrap();
        assert_eq!(request, TicketTypeRequest::new(TicketType::Adult, 2).unwrap());
    }

    #[test]
    fn deserialization_rejects_negative_count() {
        let result =
            serde_json::from_str::<TicketTypeRequest>(r#"{"ticket_type":"CHILD","no_of_tickets":-4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_field_names() {
        let request = TicketTypeRequest::new(TicketType::Infant, 1).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"ticket_type":"INFANT","no_of_tickets":1}"#);
    }
}
