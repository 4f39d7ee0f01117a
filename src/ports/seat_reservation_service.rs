//! Seat reservation port.
//!
//! Defines the contract for the external seat booking system. Called only
//! after payment has gone through.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode};

/// Port for reserving seats against an account.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for the account.
    async fn reserve_seat(&self, account_id: AccountId, seat_count: u32)
        -> Result<(), ReservationError>;
}

/// Error reported by the seat booking system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Not enough seats available: requested {requested}")]
    InsufficientSeats { requested: u32 },

    #[error("Seat booking unavailable: {0}")]
    Unavailable(String),
}

impl ReservationError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        ReservationError::Unavailable(message.into())
    }
}

impl From<ReservationError> for DomainError {
    fn from(err: ReservationError) -> Self {
        DomainError::new(ErrorCode::ReservationFailed, err.to_string())
    }
}
