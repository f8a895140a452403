//! Error types for ticket purchases.
//!
//! Purchases fail in three distinct ways:
//!
//! - [`PurchaseRejected`]: the request broke a shape or business rule. Raised before
//!   any collaborator is called, so nothing was charged or reserved.
//! - [`CollaboratorError`]: a payment or reservation collaborator reported a failure.
//!   Passed through untouched.
//! - [`ConfigurationError`]: a service was wired without one of its collaborators.
//!   Raised at construction time, never per call.

use thiserror::Error;

/// Why a purchase was refused.
///
/// Each variant corresponds to exactly one rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// Account id missing, zero or negative
    #[error("Invalid account ID")]
    InvalidAccountId,

    /// No line item list was supplied at all
    #[error("Line items must be provided")]
    MissingLineItems,

    /// The line item list was supplied but empty
    #[error("At least one ticket type must be specified")]
    EmptyLineItems,

    /// An entry of the line item list was missing
    #[error("Line item at position {index} is missing")]
    MissingLineItem {
        /// Zero-based position of the missing entry
        index: usize,
    },

    /// Summed quantity is below one
    #[error("At least one ticket must be purchased (requested {total})")]
    BelowMinimumTickets {
        /// Summed quantity across all line items
        total: i64,
    },

    /// Summed quantity exceeds the per-purchase limit
    #[error("Cannot purchase more than {max} tickets at a time (requested {total})")]
    AboveMaximumTickets {
        /// Summed quantity across all line items
        total: i64,
        /// The per-purchase limit
        max: i64,
    },

    /// Child or infant tickets requested without any adult line
    #[error("Child and infant tickets cannot be purchased without an adult ticket")]
    MissingAdultTicket,
}

impl RejectionReason {
    /// Stable label for logs and metrics
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidAccountId => "invalid_account_id",
            Self::MissingLineItems => "missing_line_items",
            Self::EmptyLineItems => "empty_line_items",
            Self::MissingLineItem { .. } => "missing_line_item",
            Self::BelowMinimumTickets { .. } => "below_minimum_tickets",
            Self::AboveMaximumTickets { .. } => "above_maximum_tickets",
            Self::MissingAdultTicket => "missing_adult_ticket",
        }
    }
}

/// A purchase request that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Purchase rejected: {reason}")]
pub struct PurchaseRejected {
    reason: RejectionReason,
}

impl PurchaseRejected {
    /// Wraps a rejection reason
    #[must_use]
    pub const fn new(reason: RejectionReason) -> Self {
        Self { reason }
    }

    /// Returns the rule that refused the purchase
    #[must_use]
    pub const fn reason(&self) -> RejectionReason {
        self.reason
    }
}

impl From<RejectionReason> for PurchaseRejected {
    fn from(reason: RejectionReason) -> Self {
        Self::new(reason)
    }
}

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{collaborator} failed: {message}")]
pub struct CollaboratorError {
    /// Which collaborator failed (e.g. "payment", "seat reservation")
    pub collaborator: &'static str,
    /// Description supplied by the collaborator
    pub message: String,
}

impl CollaboratorError {
    /// Creates a new collaborator error
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

/// Result type for collaborator calls
pub type CollaboratorResult = Result<(), CollaboratorError>;

/// A service could not be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A required collaborator was never supplied
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}
