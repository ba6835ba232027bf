//! RecordPaymentHandler - takes payment for a booking.

use std::sync::Arc;

use crate::domain::foundation::{BookingId, DomainError};
use crate::domain::payment::{Payment, PaymentMode};
use crate::ports::{BookingStore, PaymentStore};

/// Command to record a payment against a booking.
///
/// The amount is never part of the command; it comes from the booked
/// cylinder's price.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub booking_id: BookingId,
    pub mode: PaymentMode,
}

/// Handler for recording payments.
pub struct RecordPaymentHandler {
    bookings: Arc<dyn BookingStore>,
    payments: Arc<dyn PaymentStore>,
}

impl RecordPaymentHandler {
    pub fn new(bookings: Arc<dyn BookingStore>, payments: Arc<dyn PaymentStore>) -> Self {
        Self { bookings, payments }
    }

    /// Records the payment.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the identifier is unknown; nothing is recorded
    pub async fn handle(&self, cmd: RecordPaymentCommand) -> Result<Payment, DomainError> {
        let booking = self
            .bookings
            .find_by_id(&cmd.booking_id)
            .await?
            .ok_or_else(|| DomainError::booking_not_found(&cmd.booking_id))?;

        self.payments.record(&booking, cmd.mode).await
    }
}
