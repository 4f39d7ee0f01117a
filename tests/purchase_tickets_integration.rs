//! Integration tests for ticket purchases.
//!
//! These tests drive `PurchaseTicketsHandler` through the public API with the
//! in-crate payment and seat booking adapters:
//! 1. Valid purchases are charged, then seated
//! 2. Invalid purchases never reach either collaborator
//! 3. Collaborator failures surface unchanged
//! 4. Handlers built from configuration apply configured rules

use std::sync::Arc;

use ticket_service::adapters::{
    Charge, InMemorySeatReservationService, MockTicketPaymentService, Reservation,
};
use ticket_service::application::{PurchaseError, PurchaseTicketsCommand, PurchaseTicketsHandler};
use ticket_service::config::{AppConfig, PricingConfig, PurchaseConfig};
use ticket_service::domain::foundation::{AccountId, CommandMetadata, ErrorCode};
use ticket_service::domain::ticketing::{TicketType, TicketTypeRequest};
use ticket_service::ports::{PaymentError, ReservationError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    payments: MockTicketPaymentService,
    seats: InMemorySeatReservationService,
    handler: PurchaseTicketsHandler,
}

impl Fixture {
    fn new() -> Self {
        Self::with_seats(InMemorySeatReservationService::new())
    }

    fn with_seats(seats: InMemorySeatReservationService) -> Self {
        let payments = MockTicketPaymentService::new();
        let handler = PurchaseTicketsHandler::new(
            Arc::new(payments.clone()),
            Arc::new(seats.clone()),
        );
        Self {
            payments,
            seats,
            handler,
        }
    }

    async fn purchase(&self, account_id: i64, requests: Vec<TicketTypeRequest>) -> Result<(), PurchaseError> {
        self.handler
            .handle(
                PurchaseTicketsCommand::new(account_id, requests),
                CommandMetadata::new().with_source("integration-test"),
            )
            .await
            .map(|_| ())
    }

    fn untouched(&self) -> bool {
        self.payments.attempts() == 0 && self.seats.reservations().is_empty()
    }
}

fn tickets(ticket_type: TicketType, count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).unwrap()
}

fn account(id: i64) -> AccountId {
    AccountId::new(id).unwrap()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[tokio::test]
async fn family_purchase_is_charged_and_seated() {
    let fixture = Fixture::new();

    fixture
        .purchase(
            6,
            vec![
                tickets(TicketType::Infant, 1),
                tickets(TicketType::Child, 2),
                tickets(TicketType::Adult, 5),
            ],
        )
        .await
        .unwrap();

    assert_eq!(
        fixture.payments.charges(),
        vec![Charge {
            account_id: account(6),
            amount: 155
        }]
    );
    assert_eq!(
        fixture.seats.reservations(),
        vec![Reservation {
            account_id: account(6),
            seat_count: 7
        }]
    );
}

#[tokio::test]
async fn invalid_account_without_requests() {
    let fixture = Fixture::new();

    let err = fixture.purchase(0, vec![]).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid Account ID: 0.");
    assert_eq!(err.code(), ErrorCode::InvalidAccount);
    assert!(fixture.untouched());
}

#[tokio::test]
async fn twenty_six_tickets_exceed_the_limit() {
    let fixture = Fixture::new();

    let err = fixture
        .purchase(6, vec![tickets(TicketType::Adult, 20), tickets(TicketType::Child, 6)])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Maximum purchasable ticket limit 25 exceeded.");
    assert!(fixture.untouched());
}

#[tokio::test]
async fn children_and_infants_need_an_adult() {
    let fixture = Fixture::new();

    let err = fixture
        .purchase(6, vec![tickets(TicketType::Infant, 1), tickets(TicketType::Child, 5)])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Child and Infant tickets cannot be purchased without purchasing an Adult ticket."
    );
    assert!(fixture.untouched());
}

#[tokio::test]
async fn json_command_without_requests_is_rejected() {
    let fixture = Fixture::new();
    let cmd: PurchaseTicketsCommand = serde_json::from_str(r#"{"account_id":5}"#).unwrap();

    let err = fixture
        .handler
        .handle(cmd, CommandMetadata::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid Ticket Requests.");
    assert!(fixture.untouched());
}

// =============================================================================
// Collaborator failures
// =============================================================================

#[tokio::test]
async fn declined_payment_reserves_nothing() {
    let fixture = Fixture::new();
    fixture.payments.set_error(PaymentError::declined("insufficient funds"));

    let err = fixture
        .purchase(3, vec![tickets(TicketType::Adult, 2)])
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::Payment(PaymentError::declined("insufficient funds")));
    assert_eq!(fixture.payments.attempts(), 1);
    assert!(fixture.seats.reservations().is_empty());
}

#[tokio::test]
async fn sold_out_venue_keeps_the_payment() {
    let fixture = Fixture::with_seats(InMemorySeatReservationService::with_capacity(2));

    let err = fixture
        .purchase(3, vec![tickets(TicketType::Adult, 2), tickets(TicketType::Child, 1)])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PurchaseError::Reservation(ReservationError::InsufficientSeats { requested: 3 })
    );
    assert_eq!(fixture.payments.total_charged(account(3)), 65);
    assert_eq!(fixture.seats.available(), Some(2));
}

#[tokio::test]
async fn concurrent_purchases_are_independent() {
    let fixture = Arc::new(Fixture::new());

    let mut tasks = Vec::new();
    for id in 1..=8 {
        let fixture = fixture.clone();
        tasks.push(tokio::spawn(async move {
            fixture
                .purchase(id, vec![tickets(TicketType::Adult, 1), tickets(TicketType::Infant, 1)])
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(fixture.payments.charges().len(), 8);
    for id in 1..=8 {
        assert_eq!(fixture.payments.total_charged(account(id)), 25);
        assert_eq!(fixture.seats.seats_held(account(id)), 1);
    }
}

// =============================================================================
// Configured handlers
// =============================================================================

#[tokio::test]
async fn configured_limit_and_prices_apply() {
    let config = AppConfig {
        purchase: PurchaseConfig { max_tickets: 4 },
        pricing: PricingConfig {
            adult_minor_units: 1999,
            child_minor_units: 1050,
            infant_minor_units: 0,
        },
        ..Default::default()
    };
    config.validate().unwrap();

    let payments = MockTicketPaymentService::new();
    let seats = InMemorySeatReservationService::new();
    let handler = PurchaseTicketsHandler::new(Arc::new(payments.clone()), Arc::new(seats.clone()))
        .with_policy(config.purchase.policy())
        .with_price_table(Arc::new(config.pricing.price_table()));

    let err = handler
        .handle(
            PurchaseTicketsCommand::new(1, vec![tickets(TicketType::Adult, 5)]),
            CommandMetadata::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Maximum purchasable ticket limit 4 exceeded.");

    let receipt = handler
        .handle(
            PurchaseTicketsCommand::new(
                1,
                vec![tickets(TicketType::Adult, 1), tickets(TicketType::Child, 1)],
            ),
            CommandMetadata::new(),
        )
        .await
        .unwrap();

    // 19.99 + 10.50 rounds down to 30
    assert_eq!(receipt.amount_paid, 30);
    assert_eq!(payments.total_charged(account(1)), 30);
    assert_eq!(seats.seats_held(account(1)), 2);
}
