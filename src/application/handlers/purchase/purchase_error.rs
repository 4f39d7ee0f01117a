//! Errors returned by the purchase handler.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ticketing::InvalidPurchaseError;
use crate::ports::{PaymentError, ReservationError};

/// Why a ticket purchase did not complete.
///
/// Collaborator failures are passed through untouched. A `Reservation`
/// error means the payment already went through and was not reversed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Invalid(#[from] InvalidPurchaseError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

impl PurchaseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PurchaseError::Invalid(err) => err.code(),
            PurchaseError::Payment(_) => ErrorCode::PaymentFailed,
            PurchaseError::Reservation(_) => ErrorCode::ReservationFailed,
        }
    }

    /// Returns the rule violation, if the request itself was invalid.
    pub fn as_invalid(&self) -> Option<&InvalidPurchaseError> {
        match self {
            PurchaseError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PurchaseError> for DomainError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::Invalid(err) => err.into(),
            PurchaseError::Payment(err) => err.into(),
            PurchaseError::Reservation(err) => err.into(),
        }
    }
}
