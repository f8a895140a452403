//! Purchases submitted as JSON, where any field may be null or absent.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use box_office::TicketService;
use box_office_core::{Money, PurchaseRequest, RejectionReason};
use box_office_testing::recording_collaborators;

fn submit(json: &str) -> Result<box_office::PurchaseReceipt, box_office::PurchaseError> {
    let (_, payments, reservations) = recording_collaborators();
    let request: PurchaseRequest = serde_json::from_str(json).unwrap();
    TicketService::new(payments, reservations).purchase(&request)
}

fn reason(json: &str) -> RejectionReason {
    submit(json).unwrap_err().rejection_reason().unwrap()
}

#[test]
fn test_well_formed_json_purchase() {
    let receipt = submit(
        r#"{
            "account_id": 1,
            "line_items": [
                {"category": "ADULT", "quantity": 2},
                {"category": "CHILD", "quantity": 3},
                {"category": "INFANT", "quantity": 1}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(receipt.amount_paid, Money::new(95));
    assert_eq!(receipt.seats_reserved, 5);
}

#[test]
fn test_null_account_and_null_items() {
    assert_eq!(
        reason(r#"{"account_id": null, "line_items": null}"#),
        RejectionReason::InvalidAccountId
    );
    assert_eq!(
        reason(r#"{"account_id": 1, "line_items": null}"#),
        RejectionReason::MissingLineItems
    );
    assert_eq!(reason("{}"), RejectionReason::InvalidAccountId);
}

#[test]
fn test_null_entry_in_items() {
    assert_eq!(
        reason(r#"{"account_id": 1, "line_items": [null, {"category": "ADULT", "quantity": 1}]}"#),
        RejectionReason::MissingLineItem { index: 0 }
    );
}

#[test]
fn test_unknown_category_fails_to_parse() {
    let parsed = serde_json::from_str::<PurchaseRequest>(
        r#"{"account_id": 1, "line_items": [{"category": "SENIOR", "quantity": 1}]}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn test_receipt_serializes_plain_numbers() {
    let receipt = submit(r#"{"account_id": 4, "line_items": [{"category": "ADULT", "quantity": 1}]}"#)
        .unwrap();

    assert_eq!(
        serde_json::to_value(receipt).unwrap(),
        serde_json::json!({
            "account_id": 4,
            "amount_paid": 25,
            "seats_reserved": 1,
            "tickets": 1
        })
    );
}
