//! Purchase planner: the pure decision half of a purchase.
//!
//! The planner takes a [`PurchaseRequest`] and either refuses it or returns a
//! [`PurchasePlan`] describing which collaborator calls to make. It performs no I/O;
//! executing the plan is left to the caller, which makes every rule testable without
//! any collaborator at all.
//!
//! ```text
//! PurchaseRequest
//!       │
//!       ▼
//! SHAPE_RULES ──► PurchaseTotals ──► BUSINESS_RULES
//!       │               │                  │
//!       └── rejected ◄──┴──── rejected ◄───┘
//!                       │
//!                       ▼
//!        [MakePayment, ReserveSeats]
//! ```

use crate::effect::Effect;
use crate::error::PurchaseRejected;
use crate::rules::{PurchaseTotals, ValidatedRequest, check_business_rules};
use crate::types::{AccountId, PurchaseRequest};
use smallvec::{SmallVec, smallvec};

/// An accepted purchase, ready to be executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchasePlan {
    /// Account the purchase is for
    pub account_id: AccountId,
    /// Totals summed from the line items
    pub totals: PurchaseTotals,
    /// Collaborator calls to make, in order
    pub effects: SmallVec<[Effect; 2]>,
}

/// Validates purchase requests and plans the collaborator calls for accepted ones.
///
/// Stateless; the same request always yields the same plan or rejection.
#[derive(Clone, Copy, Debug, Default)]
pub struct PurchasePlanner;

impl PurchasePlanner {
    /// Creates a new `PurchasePlanner`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates `request` and plans payment followed by seat reservation
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseRejected`] carrying the first shape or business rule the
    /// request breaks.
    pub fn plan(&self, request: &PurchaseRequest) -> Result<PurchasePlan, PurchaseRejected> {
        let validated = ValidatedRequest::parse(request)?;
        let totals = PurchaseTotals::from_line_items(&validated.line_items);
        check_business_rules(&totals)?;

        let account_id = validated.account_id;
        Ok(PurchasePlan {
            account_id,
            totals,
            effects: smallvec![
                Effect::MakePayment {
                    account_id,
                    amount: totals.payable,
                },
                Effect::ReserveSeats {
                    account_id,
                    seats: totals.seats,
                },
            ],
        })
    }
}
