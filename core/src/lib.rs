//! # Box Office Core
//!
//! Core types, rules and traits for validating and pricing ticket purchases.
//!
//! A purchase is a list of line items (a ticket category and a quantity) submitted for
//! one account. This crate decides whether the purchase is acceptable, prices it, and
//! describes the two collaborator calls that complete it. It never makes those calls
//! itself.
//!
//! ## Core Concepts
//!
//! - **Request**: [`PurchaseRequest`], the raw, possibly incomplete, submission
//! - **Totals**: [`PurchaseTotals`], summed once per request from its line items
//! - **Rules**: ordered shape and business checks, see [`rules`]
//! - **Planner**: [`PurchasePlanner`], pure function `Request → Result<Plan, Rejected>`
//! - **Effect**: [`Effect`], a description of one collaborator call
//! - **Environment**: collaborator traits injected into whoever executes a plan
//!
//! ## Example
//!
//! ```
//! use box_office_core::{Effect, LineItem, Money, PurchasePlanner, PurchaseRequest};
//!
//! let request = PurchaseRequest::new(
//!     1,
//!     [LineItem::adults(2), LineItem::children(3), LineItem::infants(1)],
//! );
//!
//! let plan = PurchasePlanner::new().plan(&request)?;
//! assert_eq!(plan.totals.payable, Money::new(95));
//! assert_eq!(plan.totals.seats, 5);
//! assert!(matches!(plan.effects[0], Effect::MakePayment { .. }));
//! # Ok::<(), box_office_core::PurchaseRejected>(())
//! ```

pub mod error;
pub mod planner;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use error::{
    CollaboratorError, CollaboratorResult, ConfigurationError, PurchaseRejected, RejectionReason,
};
pub use planner::{PurchasePlan, PurchasePlanner};
pub use rules::{MAX_TICKETS_PER_PURCHASE, MIN_TICKETS_PER_PURCHASE, PurchaseTotals};
pub use smallvec::{SmallVec, smallvec};
pub use types::{AccountId, LineItem, Money, PurchaseRequest, TicketCategory};
pub use effect::Effect;

/// Effect module - Collaborator call descriptions
///
/// Effects are values, not execution. The planner returns them and the service
/// executes them in order against its environment.
pub mod effect {
    use crate::types::{AccountId, Money};

    /// A collaborator call to be made for an accepted purchase
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// Charge the account the purchase total
        MakePayment {
            /// Account to charge
            account_id: AccountId,
            /// Amount to charge
            amount: Money,
        },

        /// Allocate seats to the account
        ReserveSeats {
            /// Account to reserve for
            account_id: AccountId,
            /// Number of seats
            seats: i64,
        },
    }

    impl Effect {
        /// Account the effect applies to
        #[must_use]
        pub const fn account_id(&self) -> AccountId {
            match self {
                Self::MakePayment { account_id, .. } | Self::ReserveSeats { account_id, .. } => {
                    *account_id
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// The two external collaborators are abstracted behind narrow capability traits and
/// injected into the service at construction time. Production code wires real
/// implementations; tests substitute recording doubles.
///
/// # Examples
///
/// ```ignore
/// // Production - forwards to the payment provider
/// struct GatewayPayments { client: GatewayClient }
/// impl PaymentService for GatewayPayments {
///     fn make_payment(&self, account_id: AccountId, amount: Money) -> CollaboratorResult {
///         self.client.charge(account_id.get(), amount.units())
///     }
/// }
///
/// // Test - records every call
/// struct RecordingPayments { calls: Mutex<Vec<(AccountId, Money)>> }
/// ```
pub mod environment {
    use crate::error::CollaboratorResult;
    use crate::types::{AccountId, Money};

    /// Something that can take a payment for an account
    pub trait PaymentService: Send + Sync {
        /// Charge `amount` to `account_id`
        ///
        /// # Errors
        ///
        /// Returns a [`crate::CollaboratorError`] if the payment could not be taken.
        fn make_payment(&self, account_id: AccountId, amount: Money) -> CollaboratorResult;
    }

    /// Something that can reserve seats for an account
    pub trait SeatReservationService: Send + Sync {
        /// Reserve `seat_count` seats for `account_id`
        ///
        /// # Errors
        ///
        /// Returns a [`crate::CollaboratorError`] if the seats could not be reserved.
        fn reserve_seats(&self, account_id: AccountId, seat_count: i64) -> CollaboratorResult;
    }
}
