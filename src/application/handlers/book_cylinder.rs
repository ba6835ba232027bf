//! BookCylinderHandler - places a cylinder-refill booking.
//!
//! Resolves the customer, lets the booking store apply the eligibility
//! rule, and appends the new booking to the customer's auxiliary index.

use std::sync::Arc;

use crate::domain::booking::{Booking, Cylinder};
use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::{BookingStore, CustomerStore};

/// Command to book a cylinder refill.
#[derive(Debug, Clone)]
pub struct BookCylinderCommand {
    pub customer_id: CustomerId,
    pub cylinder: Cylinder,
}

/// Handler for placing bookings.
pub struct BookCylinderHandler {
    customers: Arc<dyn CustomerStore>,
    bookings: Arc<dyn BookingStore>,
}

impl BookCylinderHandler {
    pub fn new(customers: Arc<dyn CustomerStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { customers, bookings }
    }

    /// Places the booking.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown; nothing is created
    /// - `NotEligible` if the customer's connection is not Active
    pub async fn handle(&self, cmd: BookCylinderCommand) -> Result<Booking, DomainError> {
        let customer = self
            .customers
            .find_by_id(&cmd.customer_id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(&cmd.customer_id))?;

        let booking = self.bookings.create(&customer, cmd.cylinder).await?;

        self.customers
            .record_booking(&customer.id, booking.id.clone())
            .await?;

        Ok(booking)
    }
}
