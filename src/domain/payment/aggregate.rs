//! Payment aggregate entity.
//!
//! # Invariants
//!
//! - `amount` equals the booked cylinder's price at creation time
//! - `paid_at` is set at creation and never changes
//! - Status starts Completed and can only move to Refunded

use crate::domain::foundation::{
    BookingId, Describable, DomainError, Money, PaymentId, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{PaymentMode, PaymentStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for this payment.
    pub id: PaymentId,

    /// Booking the payment settles.
    pub booking_id: BookingId,

    /// Amount paid, fixed at the booked cylinder's price.
    pub amount: Money,

    /// How the customer paid.
    pub mode: PaymentMode,

    /// Current status in the payment lifecycle.
    pub status: PaymentStatus,

    /// When the payment was taken.
    pub paid_at: Timestamp,
}

impl Payment {
    /// Records a completed payment for a booking.
    pub fn new(id: PaymentId, booking_id: BookingId, amount: Money, mode: PaymentMode) -> Self {
        Self {
            id,
            booking_id,
            amount,
            mode,
            status: PaymentStatus::Completed,
            paid_at: Timestamp::now(),
        }
    }

    /// Marks the payment refunded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if already Refunded; callers that
    /// want idempotent refunds check the status first.
    pub fn refund(&mut self) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(PaymentStatus::Refunded)
            .map_err(|_| {
                DomainError::invalid_transition(format!(
                    "Cannot refund payment {} in {} state",
                    self.id, self.status
                ))
            })?;
        Ok(())
    }
}

impl Describable for Payment {
    fn describe(&self) -> String {
        format!(
            "Payment {}\n  Booking: {}\n  Amount: {}\n  Mode: {}\n  Status: {}\n  Date: {}",
            self.id,
            self.booking_id,
            self.amount,
            self.mode,
            self.status,
            self.paid_at.display_date(),
        )
    }
}
