//! End-to-end purchase scenarios against recording collaborators.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use box_office::{PurchaseError, TicketService};
use box_office_core::{AccountId, LineItem, Money, PurchaseRequest, RejectionReason};
use box_office_testing::{CallLog, CollaboratorCall, init_test_tracing, recording_collaborators};

fn service() -> (CallLog, TicketService) {
    init_test_tracing();
    let (log, payments, reservations) = recording_collaborators();
    (log, TicketService::new(payments, reservations))
}

fn account(id: i64) -> AccountId {
    AccountId::try_from(id).unwrap()
}

fn rejection(result: Result<box_office::PurchaseReceipt, PurchaseError>) -> RejectionReason {
    result.unwrap_err().rejection_reason().unwrap()
}

#[test]
fn test_family_purchase_is_charged_and_seated() {
    let (log, service) = service();

    let receipt = service
        .purchase_tickets(
            1,
            &[LineItem::adults(2), LineItem::children(3), LineItem::infants(1)],
        )
        .unwrap();

    assert_eq!(receipt.amount_paid, Money::new(95));
    assert_eq!(receipt.seats_reserved, 5);
    assert_eq!(receipt.tickets, 6);
    assert_eq!(
        log.calls(),
        vec![
            CollaboratorCall::Payment {
                account_id: account(1),
                amount: Money::new(95),
            },
            CollaboratorCall::Reservation {
                account_id: account(1),
                seats: 5,
            },
        ]
    );
}

#[test]
fn test_child_only_purchase_is_rejected() {
    let (log, service) = service();

    let reason = rejection(service.purchase_tickets(1, &[LineItem::children(3)]));

    assert_eq!(reason, RejectionReason::MissingAdultTicket);
    assert!(log.is_empty());
}

#[test]
fn test_infant_only_purchase_is_rejected() {
    let (log, service) = service();

    let reason = rejection(service.purchase_tickets(1, &[LineItem::infants(20)]));

    assert_eq!(reason, RejectionReason::MissingAdultTicket);
    assert!(log.is_empty());
}

#[test]
fn test_child_and_infant_without_adult_is_rejected() {
    let (log, service) = service();

    let reason = rejection(
        service.purchase_tickets(1, &[LineItem::infants(2), LineItem::children(2)]),
    );

    assert_eq!(reason, RejectionReason::MissingAdultTicket);
    assert!(log.is_empty());
}

#[test]
fn test_twenty_six_tickets_is_rejected() {
    let (log, service) = service();

    let reason = rejection(service.purchase_tickets(
        1,
        &[LineItem::infants(3), LineItem::adults(20), LineItem::children(3)],
    ));

    assert_eq!(reason, RejectionReason::AboveMaximumTickets { total: 26, max: 25 });
    assert!(log.is_empty());
}

#[test]
fn test_twenty_five_tickets_is_accepted() {
    let (log, service) = service();

    let receipt = service
        .purchase_tickets(1, &[LineItem::adults(10), LineItem::children(15)])
        .unwrap();

    assert_eq!(receipt.tickets, 25);
    assert_eq!(receipt.amount_paid, Money::new(475));
    assert_eq!(log.len(), 2);
}

#[test]
fn test_invalid_account_ids_are_rejected() {
    let (log, service) = service();

    for account_id in [-1, 0, i64::MIN] {
        let reason = rejection(service.purchase_tickets(account_id, &[LineItem::adults(1)]));
        assert_eq!(reason, RejectionReason::InvalidAccountId);
    }
    assert!(log.is_empty());
}

#[test]
fn test_missing_account_id_is_rejected() {
    let (log, service) = service();
    let request = PurchaseRequest {
        account_id: None,
        line_items: Some(vec![Some(LineItem::adults(1))]),
    };

    let reason = rejection(service.purchase(&request));

    assert_eq!(reason, RejectionReason::InvalidAccountId);
    assert!(log.is_empty());
}

#[test]
fn test_empty_line_items_are_rejected() {
    let (log, service) = service();

    let reason = rejection(service.purchase_tickets(1, &[]));

    assert_eq!(reason, RejectionReason::EmptyLineItems);
    assert!(log.is_empty());
}

#[test]
fn test_missing_line_items_are_rejected() {
    let (log, service) = service();
    let request = PurchaseRequest {
        account_id: Some(1),
        line_items: None,
    };

    let reason = rejection(service.purchase(&request));

    assert_eq!(reason, RejectionReason::MissingLineItems);
    assert!(log.is_empty());
}

#[test]
fn test_missing_line_item_entry_is_rejected() {
    let (log, service) = service();
    let request = PurchaseRequest {
        account_id: Some(1),
        line_items: Some(vec![Some(LineItem::adults(2)), None]),
    };

    let reason = rejection(service.purchase(&request));

    assert_eq!(reason, RejectionReason::MissingLineItem { index: 1 });
    assert!(log.is_empty());
}

#[test]
fn test_lone_zero_quantity_adult_is_below_minimum() {
    let (log, service) = service();

    let reason = rejection(service.purchase_tickets(1, &[LineItem::adults(0)]));

    assert_eq!(reason, RejectionReason::BelowMinimumTickets { total: 0 });
    assert!(log.is_empty());
}

#[test]
fn test_negative_total_is_below_minimum() {
    let (log, service) = service();

    let reason = rejection(
        service.purchase_tickets(1, &[LineItem::adults(1), LineItem::children(-3)]),
    );

    assert_eq!(reason, RejectionReason::BelowMinimumTickets { total: -2 });
    assert!(log.is_empty());
}

#[test]
fn test_zero_quantity_adult_line_satisfies_adult_rule() {
    let (log, service) = service();

    let receipt = service
        .purchase_tickets(1, &[LineItem::adults(0), LineItem::children(2)])
        .unwrap();

    assert_eq!(receipt.amount_paid, Money::new(30));
    assert_eq!(receipt.seats_reserved, 2);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_negative_lines_are_passed_through_verbatim() {
    let (log, service) = service();

    // 1 adult, -10 children, 10 infants: one ticket in total, negative subtotal.
    let receipt = service
        .purchase_tickets(
            7,
            &[LineItem::adults(1), LineItem::children(-10), LineItem::infants(10)],
        )
        .unwrap();

    assert_eq!(receipt.tickets, 1);
    assert_eq!(log.payments(), vec![(account(7), Money::new(-125))]);
    assert_eq!(log.reservations(), vec![(account(7), -9)]);
}

#[test]
fn test_repeated_purchase_gives_identical_outcome() {
    let (log, service) = service();
    let items = [LineItem::adults(3), LineItem::infants(2)];

    let first = service.purchase_tickets(5, &items);
    let second = service.purchase_tickets(5, &items);

    assert_eq!(first, second);
    assert_eq!(log.payments(), vec![(account(5), Money::new(75)); 2]);
}
