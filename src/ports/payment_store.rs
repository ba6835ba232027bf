//! Payment store port.

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, Money, PaymentId};
use crate::domain::payment::{Payment, PaymentMode};
use async_trait::async_trait;
use serde::Serialize;

/// Count of payments per mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeBreakdown {
    pub cash: u64,
    pub upi: u64,
    pub card: u64,
    pub net_banking: u64,
}

/// Aggregate figures over the payment collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentReport {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub refunded: u64,
    pub total_revenue: Money,
    pub by_mode: ModeBreakdown,
}

/// Store port for payments.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Records a completed payment for a booking.
    ///
    /// The amount is derived from the booking's cylinder price; callers
    /// never supply it.
    async fn record(&self, booking: &Booking, mode: PaymentMode)
        -> Result<Payment, DomainError>;

    /// Finds a payment by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError>;

    /// All payments in recording order.
    async fn list_all(&self) -> Result<Vec<Payment>, DomainError>;

    /// Payments against the given booking, in recording order.
    async fn list_by_booking(&self, booking_id: &BookingId)
        -> Result<Vec<Payment>, DomainError>;

    /// Payments taken via the given mode, in recording order.
    async fn list_by_mode(&self, mode: PaymentMode) -> Result<Vec<Payment>, DomainError>;

    /// Refunds a payment. Idempotent on an already Refunded payment.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the identifier is unknown
    async fn refund(&self, id: &PaymentId) -> Result<Payment, DomainError>;

    /// Sum of amounts over Completed payments only.
    async fn total_revenue(&self) -> Result<Money, DomainError>;

    /// Aggregate figures for reporting.
    async fn report(&self) -> Result<PaymentReport, DomainError>;
}
