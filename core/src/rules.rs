//! Purchase rules.
//!
//! Validation happens in two ordered passes, each a list of independent rules:
//!
//! 1. [`SHAPE_RULES`] look at the raw [`PurchaseRequest`] and refuse anything with a
//!    missing or non-positive account id, a missing or empty list, or a missing entry.
//! 2. [`BUSINESS_RULES`] look at the [`PurchaseTotals`] summed from the line items and
//!    enforce the ticket count bounds and the adult-presence rule.
//!
//! Within a pass the first failing rule wins, so the order of each slice is part of
//! the contract.

use crate::error::RejectionReason;
use crate::types::{AccountId, LineItem, Money, PurchaseRequest, TicketCategory};

/// Most tickets a single purchase may contain, across all categories
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;

/// Fewest tickets a single purchase may contain
pub const MIN_TICKETS_PER_PURCHASE: i64 = 1;

// ============================================================================
// Aggregates
// ============================================================================

/// Totals derived from one purchase's line items.
///
/// Quantities are summed verbatim, negative and zero values included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseTotals {
    /// Sum of all quantities
    pub ticket_count: i64,
    /// Sum of quantity times unit price
    pub payable: Money,
    /// Sum of quantities for categories that need a seat
    pub seats: i64,
    /// Whether any line item has the adult category, whatever its quantity
    pub has_adult: bool,
}

impl PurchaseTotals {
    /// Sums the given line items, in order
    #[must_use]
    pub fn from_line_items(items: &[LineItem]) -> Self {
        items.iter().fold(Self::default(), |totals, item| Self {
            ticket_count: totals
                .ticket_count
                .saturating_add(i64::from(item.quantity())),
            payable: totals.payable.saturating_add(item.subtotal()),
            seats: totals.seats.saturating_add(item.seats()),
            has_adult: totals.has_adult || item.category() == TicketCategory::Adult,
        })
    }
}

// ============================================================================
// Shape rules
// ============================================================================

/// A check on the raw request, run before anything is summed
#[derive(Clone, Copy, Debug)]
pub struct ShapeRule {
    /// Short identifier, used in logs
    pub name: &'static str,
    /// The check itself
    pub check: fn(&PurchaseRequest) -> Result<(), RejectionReason>,
}

/// Shape rules, in evaluation order
pub const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        name: "account_id_positive",
        check: account_id_positive,
    },
    ShapeRule {
        name: "line_items_present",
        check: line_items_present,
    },
    ShapeRule {
        name: "line_items_not_empty",
        check: line_items_not_empty,
    },
    ShapeRule {
        name: "no_missing_line_item",
        check: no_missing_line_item,
    },
];

fn account_id_positive(request: &PurchaseRequest) -> Result<(), RejectionReason> {
    match request.account_id {
        Some(id) => AccountId::try_from(id).map(|_| ()),
        None => Err(RejectionReason::InvalidAccountId),
    }
}

fn line_items_present(request: &PurchaseRequest) -> Result<(), RejectionReason> {
    request
        .line_items
        .as_ref()
        .map(|_| ())
        .ok_or(RejectionReason::MissingLineItems)
}

fn line_items_not_empty(request: &PurchaseRequest) -> Result<(), RejectionReason> {
    match &request.line_items {
        Some(items) if items.is_empty() => Err(RejectionReason::EmptyLineItems),
        _ => Ok(()),
    }
}

fn no_missing_line_item(request: &PurchaseRequest) -> Result<(), RejectionReason> {
    let Some(items) = &request.line_items else {
        return Ok(());
    };
    match items.iter().position(Option::is_none) {
        Some(index) => Err(RejectionReason::MissingLineItem { index }),
        None => Ok(()),
    }
}

/// A request that passed every shape rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Account making the purchase
    pub account_id: AccountId,
    /// Every line item, in submission order
    pub line_items: Vec<LineItem>,
}

impl ValidatedRequest {
    /// Runs [`SHAPE_RULES`] in order and extracts the present values
    ///
    /// # Errors
    ///
    /// Returns the reason of the first shape rule that fails.
    pub fn parse(request: &PurchaseRequest) -> Result<Self, RejectionReason> {
        SHAPE_RULES
            .iter()
            .try_for_each(|rule| (rule.check)(request))?;

        let account_id =
            AccountId::try_from(request.account_id.ok_or(RejectionReason::InvalidAccountId)?)?;
        let line_items = request
            .line_items
            .as_deref()
            .ok_or(RejectionReason::MissingLineItems)?
            .iter()
            .flatten()
            .copied()
            .collect();

        Ok(Self {
            account_id,
            line_items,
        })
    }
}

// ============================================================================
// Business rules
// ============================================================================

/// A check on the summed totals of a well-formed request
#[derive(Clone, Copy, Debug)]
pub struct BusinessRule {
    /// Short identifier, used in logs
    pub name: &'static str,
    /// The check itself
    pub check: fn(&PurchaseTotals) -> Result<(), RejectionReason>,
}

/// Business rules, in evaluation order
pub const BUSINESS_RULES: &[BusinessRule] = &[
    BusinessRule {
        name: "minimum_tickets",
        check: minimum_tickets,
    },
    BusinessRule {
        name: "maximum_tickets",
        check: maximum_tickets,
    },
    BusinessRule {
        name: "adult_present",
        check: adult_present,
    },
];

fn minimum_tickets(totals: &PurchaseTotals) -> Result<(), RejectionReason> {
    if totals.ticket_count < MIN_TICKETS_PER_PURCHASE {
        return Err(RejectionReason::BelowMinimumTickets {
            total: totals.ticket_count,
        });
    }
    Ok(())
}

fn maximum_tickets(totals: &PurchaseTotals) -> Result<(), RejectionReason> {
    if totals.ticket_count > MAX_TICKETS_PER_PURCHASE {
        return Err(RejectionReason::AboveMaximumTickets {
            total: totals.ticket_count,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }
    Ok(())
}

fn adult_present(totals: &PurchaseTotals) -> Result<(), RejectionReason> {
    if totals.ticket_count > 0 && !totals.has_adult {
        return Err(RejectionReason::MissingAdultTicket);
    }
    Ok(())
}

/// Runs [`BUSINESS_RULES`] in order against the totals
///
/// # Errors
///
/// Returns the reason of the first business rule that fails.
pub fn check_business_rules(totals: &PurchaseTotals) -> Result<(), RejectionReason> {
    BUSINESS_RULES
        .iter()
        .try_for_each(|rule| (rule.check)(totals))
}
