//! In-memory seat booking for testing and local runs.
//!
//! Tracks reservations per account and can enforce a venue capacity.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::AccountId;
use crate::ports::{ReservationError, SeatReservationService};

/// In-memory implementation of `SeatReservationService`.
#[derive(Default, Clone)]
pub struct InMemorySeatReservationService {
    inner: Arc<Mutex<SeatState>>,
}

#[derive(Default)]
struct SeatState {
    /// Seats still available; `None` means unlimited.
    available: Option<u32>,

    /// Reservations in call order.
    reservations: Vec<Reservation>,

    /// Error to return on every call until cleared.
    error: Option<ReservationError>,
}

/// A successful reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seat_count: u32,
}

impl InMemorySeatReservationService {
    /// Create a booking system with unlimited seats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a booking system with a fixed number of seats.
    pub fn with_capacity(seats: u32) -> Self {
        let service = Self::new();
        service.state().available = Some(seats);
        service
    }

    /// Fail every reservation with `error` until cleared.
    pub fn set_error(&self, error: ReservationError) {
        self.state().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Reservations in call order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.state().reservations.clone()
    }

    /// Seats held by one account across all reservations.
    pub fn seats_held(&self, account_id: AccountId) -> u32 {
        self.state()
            .reservations
            .iter()
            .filter(|r| r.account_id == account_id)
            .fold(0u32, |total, r| total.saturating_add(r.seat_count))
    }

    /// Remaining seats, `None` when capacity is unlimited.
    pub fn available(&self) -> Option<u32> {
        self.state().available
    }

    fn state(&self) -> MutexGuard<'_, SeatState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError> {
        let mut state = self.state();

        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        if let Some(available) = state.available {
            let remaining = available
                .checked_sub(seat_count)
                .ok_or(ReservationError::InsufficientSeats {
                    requested: seat_count,
                })?;
            state.available = Some(remaining);
        }

        state.reservations.push(Reservation {
            account_id,
            seat_count,
        });
        Ok(())
    }
}
