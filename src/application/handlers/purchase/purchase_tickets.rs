//! PurchaseTicketsHandler - Command handler for buying tickets.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn, Instrument};

use super::PurchaseError;
use crate::domain::foundation::{AccountId, CommandMetadata, RequestId, Timestamp};
use crate::domain::ticketing::{PriceTable, PurchasePlan, PurchasePolicy, TicketTypeRequest};
use crate::ports::{SeatReservationService, TicketPaymentService};

/// Command to buy tickets for an account.
///
/// A missing `requests` field deserializes as an empty list and is rejected
/// like any other empty request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTicketsCommand {
    pub account_id: i64,
    #[serde(default)]
    pub requests: Vec<TicketTypeRequest>,
}

impl PurchaseTicketsCommand {
    pub fn new(account_id: i64, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id,
            requests: requests.into_iter().collect(),
        }
    }
}

/// What was charged and reserved for a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub request_id: RequestId,
    pub account_id: AccountId,
    pub total_tickets: u32,
    pub amount_paid: u64,
    pub seats_reserved: u32,
    pub completed_at: Timestamp,
}

/// Handler for ticket purchases.
///
/// Validates the request against the purchase policy, then charges the
/// account and reserves seats, in that order. Nothing is charged or reserved
/// unless every rule passes, and seats are never reserved if payment fails.
pub struct PurchaseTicketsHandler {
    payment_service: Arc<dyn TicketPaymentService>,
    seat_reservation_service: Arc<dyn SeatReservationService>,
    prices: Arc<PriceTable>,
    policy: PurchasePolicy,
}

impl PurchaseTicketsHandler {
    /// Creates a handler using the standard price table and ticket limit.
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        seat_reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
            prices: Arc::new(PriceTable::standard().clone()),
            policy: PurchasePolicy::default(),
        }
    }

    /// Builder: use a different price table.
    pub fn with_price_table(mut self, prices: Arc<PriceTable>) -> Self {
        self.prices = prices;
        self
    }

    /// Builder: use a different purchase policy.
    pub fn with_policy(mut self, policy: PurchasePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn handle(
        &self,
        cmd: PurchaseTicketsCommand,
        metadata: CommandMetadata,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let request_id = metadata.request_id();
        let span = info_span!(
            "purchase_tickets",
            %request_id,
            account_id = cmd.account_id,
            source = metadata.source().unwrap_or("unknown")
        );

        self.process(request_id, cmd).instrument(span).await
    }

    async fn process(
        &self,
        request_id: RequestId,
        cmd: PurchaseTicketsCommand,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        info!(no_of_requests = cmd.requests.len(), "Ticket purchase request received");

        // 1. Validate against the purchase rules
        let plan = self
            .policy
            .evaluate(cmd.account_id, &cmd.requests, &self.prices)
            .map_err(|err| {
                warn!(code = %err.code(), reason = %err, "Ticket purchase rejected");
                err
            })?;

        for (ticket_type, count) in plan.totals.line_items() {
            if let Some(unit_price) = self.prices.price_of(ticket_type) {
                info!(%ticket_type, no_of_tickets = count, %unit_price, "Ticket line item");
            }
        }

        // 2. Charge the account
        self.make_payment(&plan).await?;

        // 3. Reserve seats; a failure here leaves the payment in place
        self.reserve_seats(&plan).await?;

        info!("Ticket purchase processed successfully");

        Ok(PurchaseReceipt {
            request_id,
            account_id: plan.account_id,
            total_tickets: plan.totals.total_tickets(),
            amount_paid: plan.amount_due,
            seats_reserved: plan.seats_to_reserve,
            completed_at: Timestamp::now(),
        })
    }

    async fn make_payment(&self, plan: &PurchasePlan) -> Result<(), PurchaseError> {
        info!(amount = plan.amount_due, "Requesting payment");
        self.payment_service
            .make_payment(plan.account_id, plan.amount_due)
            .await
            .map_err(|err| {
                error!(error = %err, amount = plan.amount_due, "Payment failed");
                PurchaseError::Payment(err)
            })
    }

    async fn reserve_seats(&self, plan: &PurchasePlan) -> Result<(), PurchaseError> {
        info!(
            total_tickets = plan.totals.total_tickets(),
            infant_tickets = plan.totals.infant_tickets(),
            seats_to_reserve = plan.seats_to_reserve,
            "Requesting seat reservation"
        );
        self.seat_reservation_service
            .reserve_seat(plan.account_id, plan.seats_to_reserve)
            .await
            .map_err(|err| {
                error!(
                    error = %err,
                    amount_paid = plan.amount_due,
                    "Seat reservation failed after payment"
                );
                PurchaseError::Reservation(err)
            })
    }
}
