//! Booking aggregate entity.
//!
//! # Invariants
//!
//! - `id` is globally unique and assigned once at creation
//! - `expected_delivery` is fixed at creation (booking date + lead days)
//! - `delivered_at` is `Some` if and only if status is Delivered

use crate::domain::foundation::{
    BookingId, CustomerId, Describable, DomainError, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{BookingStatus, Cylinder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for this booking.
    pub id: BookingId,

    /// Customer who placed the booking.
    pub customer_id: CustomerId,

    /// Cylinder variant booked; fixes the payable price.
    pub cylinder: Cylinder,

    /// When the booking was placed.
    pub booked_at: Timestamp,

    /// Promised delivery date, immutable after creation.
    pub expected_delivery: Timestamp,

    /// Actual hand-over time; set exactly when status becomes Delivered.
    pub delivered_at: Option<Timestamp>,

    /// Current status in the delivery lifecycle.
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new pending booking with the given delivery lead time.
    pub fn new(
        id: BookingId,
        customer_id: CustomerId,
        cylinder: Cylinder,
        lead_days: i64,
    ) -> Self {
        let booked_at = Timestamp::now();
        Self {
            id,
            customer_id,
            cylinder,
            booked_at,
            expected_delivery: booked_at.add_days(lead_days),
            delivered_at: None,
            status: BookingStatus::Pending,
        }
    }

    /// Advances the delivery status one step forward.
    ///
    /// Reaching Delivered stamps `delivered_at` with the current time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` for backward moves, skipped states,
    /// or any move out of a terminal status.
    pub fn advance(&mut self, target: BookingStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::invalid_transition(format!(
                "Cannot move booking {} from {} to {}",
                self.id, self.status, target
            ))
        })?;
        if self.status == BookingStatus::Delivered {
            self.delivered_at = Some(Timestamp::now());
        }
        Ok(())
    }

    /// Cancels the booking from any non-terminal state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if already Delivered; callers that
    /// want idempotent cancellation check for Cancelled first.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.advance(BookingStatus::Cancelled)
    }
}

impl Describable for Booking {
    fn describe(&self) -> String {
        let delivered = self
            .delivered_at
            .map(|ts| ts.display_date())
            .unwrap_or_else(|| "Not yet delivered".to_string());
        format!(
            "Booking {}\n  Customer: {}\n  Cylinder: {}\n  Booked: {}\n  Expected Delivery: {}\n  Actual Delivery: {}\n  Status: {}",
            self.id,
            self.customer_id,
            self.cylinder,
            self.booked_at.display_date(),
            self.expected_delivery.display_date(),
            delivered,
            self.status,
        )
    }
}
