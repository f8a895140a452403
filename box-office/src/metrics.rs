//! Business metrics for the box office.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the binary
//! installs a recorder.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `box_office_purchases_total{outcome}` - Purchases by outcome (accepted, rejected, failed)
//! - `box_office_rejections_total{reason}` - Rejections by rule
//! - `box_office_collaborator_failures_total{collaborator}` - Failed collaborator calls
//! - `box_office_revenue_total` - Amount passed to the payment collaborator
//! - `box_office_seats_reserved_total` - Seats passed to the reservation collaborator
//! - `box_office_tickets_sold_total` - Tickets in completed purchases

use crate::service::PurchaseReceipt;
use box_office_core::RejectionReason;
use metrics::describe_counter;

/// Initialize and register all business metrics descriptions.
///
/// This should be called once at application startup, before any metrics are recorded.
pub fn register_business_metrics() {
    describe_counter!(
        "box_office_purchases_total",
        "Total number of purchase attempts by outcome (accepted, rejected, failed)"
    );
    describe_counter!(
        "box_office_rejections_total",
        "Total number of rejected purchases by rule"
    );
    describe_counter!(
        "box_office_collaborator_failures_total",
        "Total number of failed payment or reservation calls"
    );
    describe_counter!(
        "box_office_revenue_total",
        "Total amount charged for completed purchases"
    );
    describe_counter!(
        "box_office_seats_reserved_total",
        "Total number of seats reserved"
    );
    describe_counter!(
        "box_office_tickets_sold_total",
        "Total number of tickets sold, infants included"
    );

    tracing::info!("Business metrics registered");
}

// ============================================================================
// Metric Recording Functions
// ============================================================================

/// Record an accepted purchase.
///
/// Counters only go up, so negative totals are not added.
pub fn record_purchase_completed(receipt: &PurchaseReceipt) {
    metrics::counter!("box_office_purchases_total", "outcome" => "accepted").increment(1);
    metrics::counter!("box_office_revenue_total")
        .increment(u64::try_from(receipt.amount_paid.units()).unwrap_or(0));
    metrics::counter!("box_office_seats_reserved_total")
        .increment(u64::try_from(receipt.seats_reserved).unwrap_or(0));
    metrics::counter!("box_office_tickets_sold_total")
        .increment(u64::try_from(receipt.tickets).unwrap_or(0));
    tracing::debug!("Recorded purchase_completed metric");
}

/// Record a purchase refused by a rule.
pub fn record_purchase_rejected(reason: RejectionReason) {
    metrics::counter!("box_office_purchases_total", "outcome" => "rejected").increment(1);
    metrics::counter!("box_office_rejections_total", "reason" => reason.code()).increment(1);
    tracing::debug!(reason = reason.code(), "Recorded purchase_rejected metric");
}

/// Record a purchase that failed in a collaborator.
///
/// `collaborator` is `"payment"` or `"seat_reservation"`.
pub fn record_purchase_failed(collaborator: &'static str) {
    metrics::counter!("box_office_purchases_total", "outcome" => "failed").increment(1);
    metrics::counter!("box_office_collaborator_failures_total", "collaborator" => collaborator)
        .increment(1);
    tracing::debug!(collaborator, "Recorded purchase_failed metric");
}
