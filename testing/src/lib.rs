//! # Box Office Testing
//!
//! Testing utilities and helpers for Box Office purchases.
//!
//! This crate provides:
//! - Recording and failing implementations of the collaborator traits
//! - A shared [`CallLog`] to assert the order of calls across collaborators
//! - [`PurchaseTest`], a Given-When-Then helper for the planner
//! - proptest strategies for line items and purchases
//!
//! ## Example
//!
//! ```
//! use box_office_core::environment::PaymentService;
//! use box_office_core::{AccountId, Money};
//! use box_office_testing::{CallLog, CollaboratorCall, RecordingPaymentService};
//!
//! let log = CallLog::new();
//! let payments = RecordingPaymentService::with_log(log.clone());
//!
//! let account_id = AccountId::try_from(1).unwrap();
//! payments.make_payment(account_id, Money::new(25)).unwrap();
//!
//! assert_eq!(
//!     log.calls(),
//!     vec![CollaboratorCall::Payment { account_id, amount: Money::new(25) }]
//! );
//! ```


pub use purchase_test::{PurchaseTest, assertions};

/// Mock implementations of the collaborator traits
pub mod mocks {
    use box_office_core::environment::{PaymentService, SeatReservationService};
    use box_office_core::{AccountId, CollaboratorError, CollaboratorResult, Money};
    use std::sync::{Arc, Mutex, PoisonError};

    /// One call received by a collaborator double
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CollaboratorCall {
        /// `make_payment` was called
        Payment {
            /// Account charged
            account_id: AccountId,
            /// Amount charged
            amount: Money,
        },
        /// `reserve_seats` was called
        Reservation {
            /// Account reserved for
            account_id: AccountId,
            /// Seats requested
            seats: i64,
        },
    }

    /// Ordered record of collaborator calls, shareable between doubles
    ///
    /// Cloning yields a handle to the same log.
    #[derive(Clone, Debug, Default)]
    pub struct CallLog {
        calls: Arc<Mutex<Vec<CollaboratorCall>>>,
    }

    impl CallLog {
        /// Create an empty log
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Append a call
        pub fn record(&self, call: CollaboratorCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }

        /// Snapshot of every call so far, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<CollaboratorCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of calls so far
        #[must_use]
        pub fn len(&self) -> usize {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether no collaborator has been called
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Payment calls only
        #[must_use]
        pub fn payments(&self) -> Vec<(AccountId, Money)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    CollaboratorCall::Payment { account_id, amount } => Some((account_id, amount)),
                    CollaboratorCall::Reservation { .. } => None,
                })
                .collect()
        }

        /// Reservation calls only
        #[must_use]
        pub fn reservations(&self) -> Vec<(AccountId, i64)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    CollaboratorCall::Reservation { account_id, seats } => {
                        Some((account_id, seats))
                    }
                    CollaboratorCall::Payment { .. } => None,
                })
                .collect()
        }
    }

    /// Payment double that accepts and records every payment
    #[derive(Clone, Debug, Default)]
    pub struct RecordingPaymentService {
        log: CallLog,
    }

    impl RecordingPaymentService {
        /// Create a double with its own log
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a double writing to a shared log
        #[must_use]
        pub const fn with_log(log: CallLog) -> Self {
            Self { log }
        }

        /// The log this double writes to
        #[must_use]
        pub const fn log(&self) -> &CallLog {
            &self.log
        }
    }

    impl PaymentService for RecordingPaymentService {
        fn make_payment(&self, account_id: AccountId, amount: Money) -> CollaboratorResult {
            self.log
                .record(CollaboratorCall::Payment { account_id, amount });
            Ok(())
        }
    }

    /// Reservation double that accepts and records every reservation
    #[derive(Clone, Debug, Default)]
    pub struct RecordingSeatReservationService {
        log: CallLog,
    }

    impl RecordingSeatReservationService {
        /// Create a double with its own log
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a double writing to a shared log
        #[must_use]
        pub const fn with_log(log: CallLog) -> Self {
            Self { log }
        }

        /// The log this double writes to
        #[must_use]
        pub const fn log(&self) -> &CallLog {
            &self.log
        }
    }

    impl SeatReservationService for RecordingSeatReservationService {
        fn reserve_seats(&self, account_id: AccountId, seat_count: i64) -> CollaboratorResult {
            self.log.record(CollaboratorCall::Reservation {
                account_id,
                seats: seat_count,
            });
            Ok(())
        }
    }

    /// Payment double that records the attempt and then fails
    #[derive(Clone, Debug)]
    pub struct FailingPaymentService {
        log: CallLog,
        message: String,
    }

    impl FailingPaymentService {
        /// Create a double that fails with `message`
        #[must_use]
        pub fn new(log: CallLog, message: impl Into<String>) -> Self {
            Self {
                log,
                message: message.into(),
            }
        }
    }

    impl PaymentService for FailingPaymentService {
        fn make_payment(&self, account_id: AccountId, amount: Money) -> CollaboratorResult {
            self.log
                .record(CollaboratorCall::Payment { account_id, amount });
            Err(CollaboratorError::new("payment", self.message.clone()))
        }
    }

    /// Reservation double that records the attempt and then fails
    #[derive(Clone, Debug)]
    pub struct FailingSeatReservationService {
        log: CallLog,
        message: String,
    }

    impl FailingSeatReservationService {
        /// Create a double that fails with `message`
        #[must_use]
        pub fn new(log: CallLog, message: impl Into<String>) -> Self {
            Self {
                log,
                message: message.into(),
            }
        }
    }

    impl SeatReservationService for FailingSeatReservationService {
        fn reserve_seats(&self, account_id: AccountId, seat_count: i64) -> CollaboratorResult {
            self.log.record(CollaboratorCall::Reservation {
                account_id,
                seats: seat_count,
            });
            Err(CollaboratorError::new("seat reservation", self.message.clone()))
        }
    }

    /// Recording payment and reservation doubles sharing one log
    #[must_use]
    pub fn recording_collaborators() -> (
        CallLog,
        Arc<RecordingPaymentService>,
        Arc<RecordingSeatReservationService>,
    ) {
        let log = CallLog::new();
        (
            log.clone(),
            Arc::new(RecordingPaymentService::with_log(log.clone())),
            Arc::new(RecordingSeatReservationService::with_log(log)),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Route `tracing` output through the test harness
    ///
    /// Safe to call from every test; only the first call installs a subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "box_office=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use box_office_core::{LineItem, MAX_TICKETS_PER_PURCHASE, TicketCategory};
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Any ticket category
    pub fn arb_category() -> impl Strategy<Value = TicketCategory> {
        prop::sample::select(TicketCategory::ALL.to_vec())
    }

    /// A line item with a quantity drawn from `quantities`
    pub fn arb_line_item(
        quantities: impl Strategy<Value = i32>,
    ) -> impl Strategy<Value = LineItem> {
        (arb_category(), quantities).prop_map(|(category, quantity)| LineItem::new(category, quantity))
    }

    /// Up to eight line items with small, possibly negative, quantities
    pub fn arb_line_items() -> impl Strategy<Value = Vec<LineItem>> {
        vec(arb_line_item(-5..=30), 0..8)
    }

    /// Line items that the business rules accept: at least one adult, positive
    /// quantities, and a total between 1 and the per-purchase limit
    pub fn arb_acceptable_line_items() -> impl Strategy<Value = Vec<LineItem>> {
        let max = i32::try_from(MAX_TICKETS_PER_PURCHASE).unwrap_or(i32::MAX);
        (1..=max, vec((arb_category(), 1..=max), 0..4))
            .prop_map(move |(adults, extras)| {
                let mut budget = max - adults;
                let mut items = vec![LineItem::adults(adults)];
                for (category, wanted) in extras {
                    let quantity = wanted.min(budget);
                    if quantity == 0 {
                        break;
                    }
                    budget -= quantity;
                    items.push(LineItem::new(category, quantity));
                }
                items
            })
            .prop_shuffle()
    }

    /// Line items with no adult category at all
    pub fn arb_adultless_line_items() -> impl Strategy<Value = Vec<LineItem>> {
        vec(
            (
                prop::sample::select(vec![TicketCategory::Infant, TicketCategory::Child]),
                1..=5_i32,
            )
                .prop_map(|(category, quantity)| LineItem::new(category, quantity)),
            1..5,
        )
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::{
    CallLog, CollaboratorCall, FailingPaymentService, FailingSeatReservationService,
    RecordingPaymentService, RecordingSeatReservationService, recording_collaborators,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use box_office_core::environment::{PaymentService, SeatReservationService};
    use box_office_core::{AccountId, Money};

    #[test]
    fn test_shared_log_preserves_order() {
        let (log, payments, reservations) = recording_collaborators();
        let account_id = AccountId::try_from(3).unwrap();

        reservations.reserve_seats(account_id, 2).unwrap();
        payments.make_payment(account_id, Money::new(40)).unwrap();

        assert_eq!(
            log.calls(),
            vec![
                CollaboratorCall::Reservation {
                    account_id,
                    seats: 2
                },
                CollaboratorCall::Payment {
                    account_id,
                    amount: Money::new(40)
                },
            ]
        );
        assert_eq!(log.payments(), vec![(account_id, Money::new(40))]);
        assert_eq!(log.reservations(), vec![(account_id, 2)]);
    }

    #[test]
    fn test_failing_doubles_record_then_fail() {
        let log = CallLog::new();
        let account_id = AccountId::try_from(1).unwrap();

        let payment = FailingPaymentService::new(log.clone(), "declined");
        let error = payment.make_payment(account_id, Money::new(25)).unwrap_err();
        assert_eq!(error.collaborator, "payment");
        assert_eq!(error.message, "declined");

        let reservation = FailingSeatReservationService::new(log.clone(), "sold out");
        assert!(reservation.reserve_seats(account_id, 1).is_err());

        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_new_log_is_empty() {
        assert!(CallLog::new().is_empty());
    }
}
