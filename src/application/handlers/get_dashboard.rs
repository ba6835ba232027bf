//! GetDashboardHandler - assembles the front-desk dashboard.

use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::DomainError;
use crate::ports::{BookingStore, ComplaintStore, CustomerStore, PaymentStore};

/// Handler combining the four store reports into one overview.
pub struct GetDashboardHandler {
    customers: Arc<dyn CustomerStore>,
    bookings: Arc<dyn BookingStore>,
    payments: Arc<dyn PaymentStore>,
    complaints: Arc<dyn ComplaintStore>,
}

impl GetDashboardHandler {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        bookings: Arc<dyn BookingStore>,
        payments: Arc<dyn PaymentStore>,
        complaints: Arc<dyn ComplaintStore>,
    ) -> Self {
        Self {
            customers,
            bookings,
            payments,
            complaints,
        }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, DomainError> {
        let customers = self.customers.report().await?;
        let bookings = self.bookings.report().await?;
        let payments = self.payments.report().await?;
        let complaints = self.complaints.report().await?;

        Ok(DashboardOverview::assemble(
            &customers,
            &bookings,
            &payments,
            &complaints,
        ))
    }
}
