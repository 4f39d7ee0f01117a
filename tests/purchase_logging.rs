//! Log output of ticket purchases.
//!
//! Rejections must say which values broke the rule, and accepted purchases
//! log each line item with its unit price.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

use ticket_service::adapters::{InMemorySeatReservationService, MockTicketPaymentService};
use ticket_service::application::{PurchaseTicketsCommand, PurchaseTicketsHandler};
use ticket_service::domain::foundation::CommandMetadata;
use ticket_service::domain::ticketing::{PriceTable, TicketType, TicketTypeRequest};

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
        String::from_utf8(bytes).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs one purchase with a capturing subscriber installed on this thread.
async fn purchase_logs(handler: &PurchaseTicketsHandler, account_id: i64, requests: Vec<TicketTypeRequest>) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let _ = handler
        .handle(
            PurchaseTicketsCommand::new(account_id, requests),
            CommandMetadata::new().with_source("logging-test"),
        )
        .await;

    logs.contents()
}

fn handler() -> PurchaseTicketsHandler {
    PurchaseTicketsHandler::new(
        Arc::new(MockTicketPaymentService::new()),
        Arc::new(InMemorySeatReservationService::new()),
    )
}

fn tickets(ticket_type: TicketType, count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).unwrap()
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn limit_rejection_records_requested_total() {
    let logs = purchase_logs(
        &handler(),
        6,
        vec![tickets(TicketType::Adult, 20), tickets(TicketType::Child, 6)],
    )
    .await;

    let line = logs
        .lines()
        .find(|line| line.contains("Ticket limit exceeded"))
        .unwrap_or_else(|| panic!("no limit warning in:\n{logs}"));
    assert!(line.contains("WARN"), "{line}");
    assert!(line.contains("total_tickets=26"), "{line}");
    assert!(line.contains("max_tickets=25"), "{line}");
    assert!(line.contains("source=\"logging-test\""), "{line}");
}

#[tokio::test]
async fn account_rejection_records_account_id() {
    let logs = purchase_logs(&handler(), 0, vec![]).await;

    assert!(logs.contains("Account ID must be greater than zero"), "{logs}");
    assert!(logs.contains("account_id=0"), "{logs}");
}

#[tokio::test]
async fn price_rejection_records_ticket_type() {
    let handler = handler().with_price_table(Arc::new(PriceTable::default().without_price(TicketType::Child)));

    let logs = purchase_logs(
        &handler,
        6,
        vec![tickets(TicketType::Adult, 1), tickets(TicketType::Child, 0)],
    )
    .await;

    assert!(logs.contains("No price for ticket type"), "{logs}");
    assert!(logs.contains("ticket_type=CHILD"), "{logs}");
}

// =============================================================================
// Accepted purchases
// =============================================================================

#[tokio::test]
async fn line_items_record_unit_prices() {
    let logs = purchase_logs(
        &handler(),
        6,
        vec![tickets(TicketType::Adult, 2), tickets(TicketType::Child, 1)],
    )
    .await;

    assert!(logs.contains("ticket_type=ADULT no_of_tickets=2 unit_price=25.00"), "{logs}");
    assert!(logs.contains("ticket_type=CHILD no_of_tickets=1 unit_price=15.00"), "{logs}");
    assert!(logs.contains("Ticket purchase processed successfully"), "{logs}");
}
