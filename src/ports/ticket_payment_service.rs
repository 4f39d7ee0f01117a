//! Ticket payment port.
//!
//! Defines the contract for the external payment gateway that charges an
//! account for a ticket purchase.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any payment provider
//! - **Fire and confirm**: No return value beyond success or failure
//! - **No retries here**: Retry and idempotency are the gateway's concern

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode};

/// Port for charging an account.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` whole currency units to the account.
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Error reported by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a declined payment error.
    pub fn declined(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Declined, message)
    }

    /// Create a gateway unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Unavailable, message)
    }
}

/// Payment error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentErrorCode {
    Declined,
    Unavailable,
    Other,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::Declined => "declined",
            PaymentErrorCode::Unavailable => "unavailable",
            PaymentErrorCode::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(ErrorCode::PaymentFailed, err.message)
            .with_detail("payment_code", err.code.to_string())
    }
}
