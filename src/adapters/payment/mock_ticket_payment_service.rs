//! Mock payment gateway for testing.
//!
//! Provides a configurable implementation of `TicketPaymentService` for unit
//! and integration tests. Supports:
//! - Charge tracking per account
//! - Error injection (one-shot or persistent)

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::AccountId;
use crate::ports::{PaymentError, TicketPaymentService};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let payments = MockTicketPaymentService::new();
///
/// // Inject errors
/// payments.set_error(PaymentError::declined("Test decline"));
///
/// // Inspect what was charged
/// assert_eq!(payments.charges(), vec![Charge { account_id, amount: 155 }]);
/// ```
#[derive(Default, Clone)]
pub struct MockTicketPaymentService {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Successful charges in call order.
    charges: Vec<Charge>,

    /// Error to return on the next call only.
    next_error: Option<PaymentError>,

    /// Error to return on every call until cleared.
    persistent_error: Option<PaymentError>,

    /// Every call, including failed ones.
    attempts: usize,
}

/// A successful charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    pub account_id: AccountId,
    pub amount: u64,
}

impl MockTicketPaymentService {
    /// Create a mock that accepts every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every payment with `error`.
    pub fn failing(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.state().persistent_error = Some(error);
        mock
    }

    /// Set an error to return on the next call.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.persistent_error = None;
    }

    /// Successful charges in call order.
    pub fn charges(&self) -> Vec<Charge> {
        self.state().charges.clone()
    }

    /// Sum of successful charges for one account.
    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        self.state()
            .charges
            .iter()
            .filter(|c| c.account_id == account_id)
            .map(|c| c.amount)
            .sum()
    }

    /// Number of payment attempts, failed ones included.
    pub fn attempts(&self) -> usize {
        self.state().attempts
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TicketPaymentService for MockTicketPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        let mut state = self.state();
        state.attempts += 1;

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        if let Some(error) = &state.persistent_error {
            return Err(error.clone());
        }

        state.charges.push(Charge { account_id, amount });
        Ok(())
    }
}
