//! Domain types for ticket purchases.
//!
//! This module contains the value objects a purchase is described with:
//! - [`TicketCategory`]: the closed set of ticket types and their fixed pricing
//! - [`LineItem`]: one (category, quantity) request within a purchase
//! - [`PurchaseRequest`]: the full unit of work handed to the planner
//! - [`AccountId`] and [`Money`]: identifiers and amounts passed to collaborators
//!
//! None of these types validate business rules themselves. A [`LineItem`] with a
//! zero or negative quantity is perfectly representable; the rules in
//! [`crate::rules`] decide whether a purchase built from it is acceptable.

use crate::error::RejectionReason;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account a purchase is made for.
///
/// Can only hold a strictly positive value.
///
/// # Example
///
/// ```
/// use box_office_core::AccountId;
///
/// assert!(AccountId::try_from(42).is_ok());
/// assert!(AccountId::try_from(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Returns the raw account number
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = RejectionReason;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(RejectionReason::InvalidAccountId)
        }
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// An amount in the smallest whole currency unit.
///
/// Signed, because purchase totals are summed verbatim from line items and a
/// negative quantity contributes a negative subtotal.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Nothing to pay
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` amount from whole currency units
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole currency units
    #[must_use]
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a ticket quantity
    #[must_use]
    pub fn times(self, quantity: i32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Adds two amounts, clamping at the numeric bounds
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-£{}", self.0.unsigned_abs())
        } else {
            write!(f, "£{}", self.0)
        }
    }
}

// ============================================================================
// Ticket categories
// ============================================================================

/// The kind of ticket requested.
///
/// Pricing and seating are fixed per category:
///
/// | Category | Unit price | Needs a seat |
/// |----------|------------|--------------|
/// | `Infant` | 0          | no           |
/// | `Child`  | 15         | yes          |
/// | `Adult`  | 25         | yes          |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    /// Under-twos, who sit on an adult's lap
    Infant,
    /// Child ticket
    Child,
    /// Adult ticket
    Adult,
}

impl TicketCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 3] = [Self::Infant, Self::Child, Self::Adult];

    /// Price of one infant ticket
    pub const INFANT_PRICE: Money = Money::new(0);
    /// Price of one child ticket
    pub const CHILD_PRICE: Money = Money::new(15);
    /// Price of one adult ticket
    pub const ADULT_PRICE: Money = Money::new(25);

    /// Returns the fixed price of a single ticket of this category
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Infant => Self::INFANT_PRICE,
            Self::Child => Self::CHILD_PRICE,
            Self::Adult => Self::ADULT_PRICE,
        }
    }

    /// Returns whether a ticket of this category is allocated a seat
    #[must_use]
    pub const fn requires_seat(self) -> bool {
        match self {
            Self::Infant => false,
            Self::Child | Self::Adult => true,
        }
    }

    /// Upper-case name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Infant => "INFANT",
            Self::Child => "CHILD",
            Self::Adult => "ADULT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Line items
// ============================================================================

/// One line of a purchase: a ticket category and how many of it.
///
/// Immutable once built. The quantity is not checked here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    category: TicketCategory,
    quantity: i32,
}

impl LineItem {
    /// Creates a new line item
    #[must_use]
    pub const fn new(category: TicketCategory, quantity: i32) -> Self {
        Self { category, quantity }
    }

    /// Shorthand for `quantity` adult tickets
    #[must_use]
    pub const fn adults(quantity: i32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    /// Shorthand for `quantity` child tickets
    #[must_use]
    pub const fn children(quantity: i32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    /// Shorthand for `quantity` infant tickets
    #[must_use]
    pub const fn infants(quantity: i32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    /// Returns the requested category
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Returns the requested quantity
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Price of this line: quantity times the category's unit price
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.category.unit_price().times(self.quantity)
    }

    /// Seats this line needs; zero for categories that sit without one
    #[must_use]
    pub fn seats(&self) -> i64 {
        if self.category.requires_seat() {
            i64::from(self.quantity)
        } else {
            0
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.category, self.quantity)
    }
}

// ============================================================================
// Purchase request
// ============================================================================

/// Everything submitted for one purchase attempt.
///
/// Fields are optional because requests arrive from outside the process and may be
/// incomplete: a `null` account id, a `null` list, or `null` entries inside the list
/// all deserialize successfully and are rejected later by shape validation.
///
/// # Example
///
/// ```
/// use box_office_core::{LineItem, PurchaseRequest};
///
/// let request = PurchaseRequest::new(1, [LineItem::adults(2), LineItem::children(1)]);
/// assert_eq!(request.account_id, Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Account making the purchase
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Requested lines, in submission order
    #[serde(default)]
    pub line_items: Option<Vec<Option<LineItem>>>,
}

impl PurchaseRequest {
    /// Creates a request with every field present
    #[must_use]
    pub fn new(account_id: i64, line_items: impl IntoIterator<Item = LineItem>) -> Self {
        Self {
            account_id: Some(account_id),
            line_items: Some(line_items.into_iter().map(Some).collect()),
        }
    }
}
