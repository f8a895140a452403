//! Box Office - validates, prices and completes batch ticket purchases
//!
//! A purchase names one account and a list of line items. The service checks the
//! request against the purchase rules, works out what to charge and how many seats
//! to allocate, and only then calls the payment and seat reservation collaborators.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────────────────┐
//! PurchaseRequest│      TicketService       │
//! ──────────────►│  (imperative shell)      │
//!                └────────────┬─────────────┘
//!                             │ plan()
//!                             ▼
//!                ┌──────────────────────────┐
//!                │     PurchasePlanner      │  box-office-core
//!                │  shape rules → totals →  │  (pure, no I/O)
//!                │     business rules       │
//!                └────────────┬─────────────┘
//!                             │ [MakePayment, ReserveSeats]
//!                             ▼
//!          ┌──────────────────┴──────────────────┐
//!          ▼                                     ▼
//! ┌──────────────────┐               ┌───────────────────────┐
//! │  PaymentService  │ ── then ──►   │ SeatReservationService│
//! └──────────────────┘               └───────────────────────┘
//! ```
//!
//! # Rules
//!
//! | Price | Seat | Category |
//! |-------|------|----------|
//! | 0     | no   | Infant   |
//! | 15    | yes  | Child    |
//! | 25    | yes  | Adult    |
//!
//! A purchase holds between 1 and 25 tickets and must include an adult line.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod metrics;
pub mod service;

pub use collaborators::{ConsolePaymentService, ConsoleSeatReservationService};
pub use config::Config;
pub use service::{PurchaseError, PurchaseReceipt, TicketService, TicketServiceBuilder};
