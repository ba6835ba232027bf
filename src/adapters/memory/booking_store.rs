//! In-memory booking store.

use crate::domain::booking::{Booking, BookingStatus, Cylinder, DEFAULT_DELIVERY_LEAD_DAYS};
use crate::domain::customer::Customer;
use crate::domain::foundation::{BookingId, CustomerId, DomainError};
use crate::ports::{BookingReport, BookingStore, EntityKind, IdIssuer};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Booking store backed by an in-memory vector in placement order.
#[derive(Clone)]
pub struct InMemoryBookingStore {
    bookings: Arc<RwLock<Vec<Booking>>>,
    issuer: Arc<dyn IdIssuer>,
    lead_days: i64,
}

impl InMemoryBookingStore {
    /// Creates a store with the default three-day delivery window.
    pub fn new(issuer: Arc<dyn IdIssuer>) -> Self {
        Self::with_lead_days(issuer, DEFAULT_DELIVERY_LEAD_DAYS)
    }

    /// Creates a store with a configured delivery lead time.
    pub fn with_lead_days(issuer: Arc<dyn IdIssuer>, lead_days: i64) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
            issuer,
            lead_days,
        }
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(
        &self,
        customer: &Customer,
        cylinder: Cylinder,
    ) -> Result<Booking, DomainError> {
        if !customer.is_active() {
            warn!(
                customer_id = %customer.id,
                status = %customer.connection_status,
                "booking rejected for non-active connection"
            );
            return Err(DomainError::not_eligible(format!(
                "Customer {} connection is {}; only Active connections may book",
                customer.id, customer.connection_status
            )));
        }

        let id = BookingId::new(self.issuer.next(EntityKind::Booking));
        let booking = Booking::new(id, customer.id.clone(), cylinder, self.lead_days);

        let mut bookings = self.bookings.write().await;
        bookings.push(booking.clone());
        info!(
            booking_id = %booking.id,
            customer_id = %booking.customer_id,
            cylinder = %cylinder.label(),
            expected = %booking.expected_delivery.display_date(),
            "booking created"
        );
        Ok(booking)
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id.eq_ignore_case(id)).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DomainError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.customer_id.eq_ignore_case(customer_id))
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.status == status)
            .cloned()
            .collect())
    }

    async fn advance_status(
        &self,
        id: &BookingId,
        target: BookingStatus,
    ) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::booking_not_found(id))?;

        booking.advance(target)?;
        info!(booking_id = %booking.id, status = %booking.status, "booking status advanced");
        Ok(booking.clone())
    }

    async fn cancel(&self, id: &BookingId) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::booking_not_found(id))?;

        if booking.status == BookingStatus::Cancelled {
            info!(booking_id = %booking.id, "booking already cancelled");
            return Ok(booking.clone());
        }

        booking.cancel()?;
        info!(booking_id = %booking.id, "booking cancelled");
        Ok(booking.clone())
    }

    async fn report(&self) -> Result<BookingReport, DomainError> {
        let bookings = self.bookings.read().await;
        let mut report = BookingReport {
            total: bookings.len() as u64,
            ..Default::default()
        };
        for booking in bookings.iter() {
            match booking.status {
                BookingStatus::Pending => report.pending += 1,
                BookingStatus::Confirmed => report.confirmed += 1,
                BookingStatus::OutForDelivery => report.out_for_delivery += 1,
                BookingStatus::Delivered => report.delivered += 1,
                BookingStatus::Cancelled => report.cancelled += 1,
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::CounterIdIssuer;
    use crate::domain::customer::ConnectionKind;
    use crate::domain::foundation::{ContactInfo, ErrorCode};

    fn store() -> InMemoryBookingStore {
        InMemoryBookingStore::new(Arc::new(CounterIdIssuer::new()))
    }

    fn active_customer() -> Customer {
        Customer::new(
            CustomerId::new("BG-CUST-001"),
            ContactInfo::new("Asha Rao", "9812345670", "asha@example.com", "12 MG Road"),
            ConnectionKind::Domestic,
        )
    }

    #[tokio::test]
    async fn create_for_active_customer_starts_pending() {
        let store = store();
        let booking = store
            .create(&active_customer(), Cylinder::Domestic14Kg)
            .await
            .unwrap();

        assert_eq!(booking.id.as_str(), "BG-BK-001");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(
            booking
                .expected_delivery
                .duration_since(&booking.booked_at)
                .num_days(),
            3
        );
    }

    #[tokio::test]
    async fn create_for_inactive_customer_is_not_eligible() {
        let store = store();
        let mut customer = active_customer();
        customer.deactivate().unwrap();

        let err = store
            .create(&customer, Cylinder::Domestic14Kg)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotEligible);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_for_suspended_customer_is_not_eligible() {
        let store = store();
        let mut customer = active_customer();
        customer.suspend().unwrap();

        let err = store
            .create(&customer, Cylinder::Domestic5Kg)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotEligible);
    }

    #[tokio::test]
    async fn advance_to_delivered_stamps_actual_date() {
        let store = store();
        let booking = store
            .create(&active_customer(), Cylinder::Domestic14Kg)
            .await
            .unwrap();

        store
            .advance_status(&booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::OutForDelivery)
            .await
            .unwrap();
        let delivered = store
            .advance_status(&booking.id, BookingStatus::Delivered)
            .await
            .unwrap();

        assert!(delivered.delivered_at.is_some());
    }

    #[tokio::test]
    async fn advance_unknown_booking_is_not_found() {
        let store = store();
        let err = store
            .advance_status(&BookingId::new("BG-BK-404"), BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[tokio::test]
    async fn advance_after_delivery_is_rejected() {
        let store = store();
        let booking = store
            .create(&active_customer(), Cylinder::Domestic14Kg)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::OutForDelivery)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::Delivered)
            .await
            .unwrap();

        let err = store
            .advance_status(&booking.id, BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn cancel_is_idempotent_on_cancelled_booking() {
        let store = store();
        let booking = store
            .create(&active_customer(), Cylinder::Domestic14Kg)
            .await
            .unwrap();

        let first = store.cancel(&booking.id).await.unwrap();
        assert_eq!(first.status, BookingStatus::Cancelled);

        let second = store.cancel(&booking.id).await.unwrap();
        assert_eq!(second.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancel_of_delivered_booking_is_rejected() {
        let store = store();
        let booking = store
            .create(&active_customer(), Cylinder::Domestic14Kg)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::OutForDelivery)
            .await
            .unwrap();
        store
            .advance_status(&booking.id, BookingStatus::Delivered)
            .await
            .unwrap();

        let err = store.cancel(&booking.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn list_by_customer_returns_only_that_customers_bookings_in_order() {
        let store = store();
        let asha = active_customer();
        let ravi = Customer::new(
            CustomerId::new("BG-CUST-002"),
            ContactInfo::new("Ravi Kumar", "9812345671", "ravi@example.com", "5 Hill St"),
            ConnectionKind::Domestic,
        );

        let first = store.create(&asha, Cylinder::Domestic14Kg).await.unwrap();
        store.create(&ravi, Cylinder::Domestic5Kg).await.unwrap();
        let third = store.create(&asha, Cylinder::Domestic5Kg).await.unwrap();

        let hers = store.list_by_customer(&asha.id).await.unwrap();
        let ids: Vec<_> = hers.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[tokio::test]
    async fn list_by_customer_with_no_matches_is_empty_not_error() {
        let store = store();
        let none = store
            .list_by_customer(&CustomerId::new("BG-CUST-404"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn report_counts_each_status() {
        let store = store();
        let customer = active_customer();

        let a = store.create(&customer, Cylinder::Domestic14Kg).await.unwrap();
        let b = store.create(&customer, Cylinder::Domestic5Kg).await.unwrap();
        store.create(&customer, Cylinder::Commercial19Kg).await.unwrap();

        store
            .advance_status(&a.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        store.cancel(&b.id).await.unwrap();

        let report = store.report().await.unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.pending, 1);
        assert_eq!(report.confirmed, 1);
        assert_eq!(report.cancelled, 1);
        assert_eq!(report.delivered, 0);
    }
}
