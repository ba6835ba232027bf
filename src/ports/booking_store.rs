//! Booking store port.

use crate::domain::booking::{Booking, BookingStatus, Cylinder};
use crate::domain::customer::Customer;
use crate::domain::foundation::{BookingId, CustomerId, DomainError};
use async_trait::async_trait;
use serde::Serialize;

/// Per-status counts over the booking collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingReport {
    pub total: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub out_for_delivery: u64,
    pub delivered: u64,
    pub cancelled: u64,
}

/// Store port for cylinder-refill bookings.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Places a booking for the given customer.
    ///
    /// The booking starts Pending with the expected delivery date fixed at
    /// booking time plus the configured lead days.
    ///
    /// # Errors
    ///
    /// - `NotEligible` if the customer's connection is not Active; nothing
    ///   is created in that case
    async fn create(&self, customer: &Customer, cylinder: Cylinder)
        -> Result<Booking, DomainError>;

    /// Finds a booking by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// All bookings in placement order.
    async fn list_all(&self) -> Result<Vec<Booking>, DomainError>;

    /// Bookings placed by the given customer, in placement order.
    async fn list_by_customer(&self, customer_id: &CustomerId)
        -> Result<Vec<Booking>, DomainError>;

    /// Bookings with the given status, in placement order.
    async fn list_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError>;

    /// Moves a booking one step forward in the delivery lifecycle.
    ///
    /// Reaching Delivered stamps the actual delivery date with the call
    /// time.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the identifier is unknown
    /// - `InvalidStateTransition` for backward moves, skipped states, or
    ///   any move out of Delivered or Cancelled
    async fn advance_status(
        &self,
        id: &BookingId,
        target: BookingStatus,
    ) -> Result<Booking, DomainError>;

    /// Cancels a booking. Idempotent on an already Cancelled booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the identifier is unknown
    /// - `InvalidStateTransition` if the booking is Delivered
    async fn cancel(&self, id: &BookingId) -> Result<Booking, DomainError>;

    /// Per-status counts for reporting.
    async fn report(&self) -> Result<BookingReport, DomainError>;
}
