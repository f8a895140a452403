//! Console collaborators for development and demos.
//!
//! Both services accept every call and report it through `tracing`. In production
//! they would be replaced with the real payment provider and seat booking system.

use box_office_core::environment::{PaymentService, SeatReservationService};
use box_office_core::{AccountId, CollaboratorResult, Money};
use std::sync::Arc;

/// Payment service that always succeeds
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolePaymentService;

impl ConsolePaymentService {
    /// Creates a new console payment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentService> {
        Arc::new(Self::new())
    }
}

impl PaymentService for ConsolePaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> CollaboratorResult {
        tracing::info!(
            account_id = account_id.get(),
            amount = amount.units(),
            "Payment of {amount} for account ID {account_id} was successful"
        );
        Ok(())
    }
}

/// Seat reservation service that always succeeds
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSeatReservationService;

impl ConsoleSeatReservationService {
    /// Creates a new console seat reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for ConsoleSeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, seat_count: i64) -> CollaboratorResult {
        tracing::info!(
            account_id = account_id.get(),
            seats = seat_count,
            "Reserved {seat_count} seat(s) for account ID {account_id}"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_console_payment_success() {
        let account_id = AccountId::try_from(1).unwrap();
        assert!(
            ConsolePaymentService::new()
                .make_payment(account_id, Money::new(95))
                .is_ok()
        );
    }

    #[test]
    fn test_console_reservation_success() {
        let account_id = AccountId::try_from(1).unwrap();
        assert!(
            ConsoleSeatReservationService::shared()
                .reserve_seats(account_id, 5)
                .is_ok()
        );
    }
}
