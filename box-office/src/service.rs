//! The ticket purchase service.
//!
//! [`TicketService`] is the imperative shell around the pure
//! [`PurchasePlanner`]: it asks the planner for a plan and, if the purchase is
//! accepted, executes the planned collaborator calls in order.
//!
//! ```text
//! purchase(request)
//!     │
//!     ├─► PurchasePlanner::plan ──► rejected ──► PurchaseError::Rejected
//!     │
//!     ├─► PaymentService::make_payment ──► failed ──► PurchaseError::Payment
//!     │
//!     └─► SeatReservationService::reserve_seats ──► failed ──► PurchaseError::Reservation
//! ```
//!
//! Collaborator failures are returned as-is. A payment that succeeded before a
//! reservation failure is not reversed.

use crate::metrics;
use box_office_core::environment::{PaymentService, SeatReservationService};
use box_office_core::{
    AccountId, CollaboratorError, ConfigurationError, Effect, LineItem, Money, PurchasePlan,
    PurchasePlanner, PurchaseRejected, PurchaseRequest, RejectionReason,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Why a purchase did not complete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The request broke a rule; no collaborator was called
    #[error(transparent)]
    Rejected(#[from] PurchaseRejected),

    /// The payment collaborator failed; no seats were reserved
    #[error(transparent)]
    Payment(CollaboratorError),

    /// The reservation collaborator failed after payment was taken
    #[error(transparent)]
    Reservation(CollaboratorError),
}

impl PurchaseError {
    /// The rejection reason, if the purchase was refused by a rule
    #[must_use]
    pub const fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(rejected) => Some(rejected.reason()),
            Self::Payment(_) | Self::Reservation(_) => None,
        }
    }
}

/// What was sent to the collaborators for a completed purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    /// Account the purchase was made for
    pub account_id: AccountId,
    /// Amount passed to the payment collaborator
    pub amount_paid: Money,
    /// Seat count passed to the reservation collaborator
    pub seats_reserved: i64,
    /// Total tickets in the purchase, infants included
    pub tickets: i64,
}

impl PurchaseReceipt {
    fn from_plan(plan: &PurchasePlan) -> Self {
        Self {
            account_id: plan.account_id,
            amount_paid: plan.totals.payable,
            seats_reserved: plan.totals.seats,
            tickets: plan.totals.ticket_count,
        }
    }
}

/// Validates, prices and completes ticket purchases.
///
/// Holds no per-purchase state; clones share the same collaborators and may be used
/// from any number of threads at once.
///
/// # Example
///
/// ```
/// use box_office::{ConsolePaymentService, ConsoleSeatReservationService, TicketService};
/// use box_office_core::{LineItem, Money};
///
/// let service = TicketService::new(
///     ConsolePaymentService::shared(),
///     ConsoleSeatReservationService::shared(),
/// );
///
/// let receipt = service.purchase_tickets(1, &[LineItem::adults(2), LineItem::infants(1)])?;
/// assert_eq!(receipt.amount_paid, Money::new(50));
/// assert_eq!(receipt.seats_reserved, 2);
/// # Ok::<(), box_office::PurchaseError>(())
/// ```
#[derive(Clone)]
pub struct TicketService {
    planner: PurchasePlanner,
    payments: Arc<dyn PaymentService>,
    reservations: Arc<dyn SeatReservationService>,
}

impl TicketService {
    /// Creates a service wired to the given collaborators
    #[must_use]
    pub fn new(
        payments: Arc<dyn PaymentService>,
        reservations: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            planner: PurchasePlanner::new(),
            payments,
            reservations,
        }
    }

    /// Starts wiring a service step by step
    #[must_use]
    pub fn builder() -> TicketServiceBuilder {
        TicketServiceBuilder::default()
    }

    /// Purchases `line_items` for `account_id`
    ///
    /// # Errors
    ///
    /// See [`TicketService::purchase`].
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        line_items: &[LineItem],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        self.purchase(&PurchaseRequest::new(account_id, line_items.iter().copied()))
    }

    /// Validates `request`, then takes payment and reserves seats
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Rejected`] if the request breaks a rule. Nothing was charged
    ///   or reserved.
    /// - [`PurchaseError::Payment`] if the payment collaborator failed. Nothing was
    ///   reserved.
    /// - [`PurchaseError::Reservation`] if the reservation collaborator failed. The
    ///   payment has already been taken.
    #[tracing::instrument(skip_all, fields(account_id = ?request.account_id))]
    pub fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt, PurchaseError> {
        let plan = match self.planner.plan(request) {
            Ok(plan) => plan,
            Err(rejected) => {
                let reason = rejected.reason();
                warn!(reason = reason.code(), "Purchase rejected: {reason}");
                metrics::record_purchase_rejected(reason);
                return Err(rejected.into());
            }
        };

        debug!(
            tickets = plan.totals.ticket_count,
            amount = plan.totals.payable.units(),
            seats = plan.totals.seats,
            "Purchase validated"
        );

        let mut paid = false;
        for effect in &plan.effects {
            if let Err(err) = self.execute(*effect) {
                error!(error = %err, "Collaborator call failed");
                if paid {
                    warn!(
                        amount = plan.totals.payable.units(),
                        "Payment taken but seats not reserved; no compensation is attempted"
                    );
                }
                metrics::record_purchase_failed(collaborator_label(effect));
                return Err(err);
            }
            paid |= matches!(effect, Effect::MakePayment { .. });
        }

        let receipt = PurchaseReceipt::from_plan(&plan);
        info!(
            amount = receipt.amount_paid.units(),
            seats = receipt.seats_reserved,
            tickets = receipt.tickets,
            "Purchase completed"
        );
        metrics::record_purchase_completed(&receipt);
        Ok(receipt)
    }

    fn execute(&self, effect: Effect) -> Result<(), PurchaseError> {
        match effect {
            Effect::MakePayment { account_id, amount } => self
                .payments
                .make_payment(account_id, amount)
                .map_err(PurchaseError::Payment),
            Effect::ReserveSeats { account_id, seats } => self
                .reservations
                .reserve_seats(account_id, seats)
                .map_err(PurchaseError::Reservation),
        }
    }
}

/// Metrics label for the collaborator an effect calls
const fn collaborator_label(effect: &Effect) -> &'static str {
    match effect {
        Effect::MakePayment { .. } => "payment",
        Effect::ReserveSeats { .. } => "seat_reservation",
    }
}

impl fmt::Debug for TicketService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketService")
            .field("planner", &self.planner)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of a [`TicketService`]
#[derive(Default)]
pub struct TicketServiceBuilder {
    payments: Option<Arc<dyn PaymentService>>,
    reservations: Option<Arc<dyn SeatReservationService>>,
}

impl TicketServiceBuilder {
    /// Sets the payment collaborator
    #[must_use]
    pub fn payment_service(mut self, payments: Arc<dyn PaymentService>) -> Self {
        self.payments = Some(payments);
        self
    }

    /// Sets the seat reservation collaborator
    #[must_use]
    pub fn seat_reservation_service(
        mut self,
        reservations: Arc<dyn SeatReservationService>,
    ) -> Self {
        self.reservations = Some(reservations);
        self
    }

    /// Builds the service
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCollaborator`] if either collaborator was
    /// never set.
    pub fn build(self) -> Result<TicketService, ConfigurationError> {
        let payments = self
            .payments
            .ok_or(ConfigurationError::MissingCollaborator("payment service"))?;
        let reservations = self
            .reservations
            .ok_or(ConfigurationError::MissingCollaborator("seat reservation service"))?;
        Ok(TicketService::new(payments, reservations))
    }
}
