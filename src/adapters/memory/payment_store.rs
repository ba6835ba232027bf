//! In-memory payment store.

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, Money, PaymentId};
use crate::domain::payment::{Payment, PaymentMode, PaymentStatus};
use crate::ports::{EntityKind, IdIssuer, ModeBreakdown, PaymentReport, PaymentStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Payment store backed by an in-memory vector in recording order.
#[derive(Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<Vec<Payment>>>,
    issuer: Arc<dyn IdIssuer>,
}

impl InMemoryPaymentStore {
    pub fn new(issuer: Arc<dyn IdIssuer>) -> Self {
        Self {
            payments: Arc::new(RwLock::new(Vec::new())),
            issuer,
        }
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn record(
        &self,
        booking: &Booking,
        mode: PaymentMode,
    ) -> Result<Payment, DomainError> {
        let id = PaymentId::new(self.issuer.next(EntityKind::Payment));
        let payment = Payment::new(id, booking.id.clone(), booking.cylinder.price(), mode);

        let mut payments = self.payments.write().await;
        payments.push(payment.clone());
        info!(
            payment_id = %payment.id,
            booking_id = %payment.booking_id,
            amount = %payment.amount,
            mode = %payment.mode,
            "payment recorded"
        );
        Ok(payment)
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        let payments = self.payments.read().await;
        Ok(payments.iter().find(|p| p.id.eq_ignore_case(id)).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Payment>, DomainError> {
        Ok(self.payments.read().await.clone())
    }

    async fn list_by_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<Vec<Payment>, DomainError> {
        let payments = self.payments.read().await;
        Ok(payments
            .iter()
            .filter(|p| p.booking_id.eq_ignore_case(booking_id))
            .cloned()
            .collect())
    }

    async fn list_by_mode(&self, mode: PaymentMode) -> Result<Vec<Payment>, DomainError> {
        let payments = self.payments.read().await;
        Ok(payments
            .iter()
            .filter(|p| p.mode == mode)
            .cloned()
            .collect())
    }

    async fn refund(&self, id: &PaymentId) -> Result<Payment, DomainError> {
        let mut payments = self.payments.write().await;
        let payment = payments
            .iter_mut()
            .find(|p| p.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::payment_not_found(id))?;

        if payment.status == PaymentStatus::Refunded {
            info!(payment_id = %payment.id, "payment already refunded");
            return Ok(payment.clone());
        }

        payment.refund()?;
        info!(payment_id = %payment.id, amount = %payment.amount, "payment refunded");
        Ok(payment.clone())
    }

    async fn total_revenue(&self) -> Result<Money, DomainError> {
        let payments = self.payments.read().await;
        Ok(payments
            .iter()
            .filter(|p| p.status.counts_toward_revenue())
            .map(|p| p.amount)
            .sum())
    }

    async fn report(&self) -> Result<PaymentReport, DomainError> {
        let payments = self.payments.read().await;
        let mut report = PaymentReport {
            total: payments.len() as u64,
            ..Default::default()
        };
        for payment in payments.iter() {
            match payment.status {
                PaymentStatus::Pending => report.pending += 1,
                PaymentStatus::Completed => report.completed += 1,
                PaymentStatus::Refunded => report.refunded += 1,
            }
            match payment.mode {
                PaymentMode::Cash => report.by_mode.cash += 1,
                PaymentMode::Upi => report.by_mode.upi += 1,
                PaymentMode::Card => report.by_mode.card += 1,
                PaymentMode::NetBanking => report.by_mode.net_banking += 1,
            }
            if payment.status.counts_toward_revenue() {
                report.total_revenue = report.total_revenue + payment.amount;
            }
        }
        Ok(report)
    }
}
