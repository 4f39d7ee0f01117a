//! Purchase rule violations.
//!
//! The messages are part of the public contract and must not change.
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidAccount | INVALID_ACCOUNT |
//! | EmptyRequest | EMPTY_REQUEST |
//! | MaxLimitExceeded | TICKET_LIMIT_EXCEEDED |
//! | NoAdultAccompany | ADULT_REQUIRED |
//! | PriceUndefined | PRICE_UNDEFINED |

use thiserror::Error;

use super::TicketType;
use crate::domain::foundation::{DomainError, ErrorCode};

/// A purchase request broke one of the purchase rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchaseError {
    #[error("Invalid Account ID: {0}.")]
    InvalidAccount(i64),

    #[error("Invalid Ticket Requests.")]
    EmptyRequest,

    #[error("Maximum purchasable ticket limit {0} exceeded.")]
    MaxLimitExceeded(u32),

    #[error("Child and Infant tickets cannot be purchased without purchasing an Adult ticket.")]
    NoAdultAccompany,

    #[error("Price is not defined for ticket type: {0}.")]
    PriceUndefined(TicketType),
}

impl InvalidPurchaseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            InvalidPurchaseError::InvalidAccount(_) => ErrorCode::InvalidAccount,
            InvalidPurchaseError::EmptyRequest => ErrorCode::EmptyRequest,
            InvalidPurchaseError::MaxLimitExceeded(_) => ErrorCode::TicketLimitExceeded,
            InvalidPurchaseError::NoAdultAccompany => ErrorCode::AdultRequired,
            InvalidPurchaseError::PriceUndefined(_) => ErrorCode::PriceUndefined,
        }
    }
}

impl From<InvalidPurchaseError> for DomainError {
    fn from(err: InvalidPurchaseError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
