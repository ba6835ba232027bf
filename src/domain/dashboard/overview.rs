//! The agency dashboard - aggregates counts from all four stores.

use crate::domain::foundation::{Money, Timestamp};
use crate::ports::{BookingReport, ComplaintReport, CustomerReport, PaymentReport};
use serde::Serialize;

/// Headline numbers the front desk sees on login.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    /// All registered customers.
    pub total_customers: u64,

    /// Customers whose connection is Active.
    pub active_connections: u64,

    /// All bookings ever placed.
    pub total_bookings: u64,

    /// Bookings still moving: Pending + Confirmed + Out for Delivery.
    pub pending_deliveries: u64,

    /// Bookings delivered.
    pub completed_deliveries: u64,

    /// Sum of completed payment amounts.
    pub total_revenue: Money,

    /// Complaints still needing attention: Open + In Progress.
    pub open_complaints: u64,

    /// When this snapshot was taken.
    pub generated_at: Timestamp,
}

impl DashboardOverview {
    /// Assembles the dashboard from the four per-store reports.
    pub fn assemble(
        customers: &CustomerReport,
        bookings: &BookingReport,
        payments: &PaymentReport,
        complaints: &ComplaintReport,
    ) -> Self {
        Self {
            total_customers: customers.total,
            active_connections: customers.active,
            total_bookings: bookings.total,
            pending_deliveries: bookings.pending + bookings.confirmed + bookings.out_for_delivery,
            completed_deliveries: bookings.delivered,
            total_revenue: payments.total_revenue,
            open_complaints: complaints.open + complaints.in_progress,
            generated_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ModeBreakdown;

    #[test]
    fn assemble_combines_the_four_reports() {
        let customers = CustomerReport {
            total: 10,
            active: 7,
            inactive: 2,
            suspended: 1,
            domestic: 8,
            commercial: 2,
        };
        let bookings = BookingReport {
            total: 12,
            pending: 3,
            confirmed: 2,
            out_for_delivery: 1,
            delivered: 5,
            cancelled: 1,
        };
        let payments = PaymentReport {
            total: 5,
            completed: 4,
            pending: 0,
            refunded: 1,
            total_revenue: Money::from_rupees(3612),
            by_mode: ModeBreakdown::default(),
        };
        let complaints = ComplaintReport {
            total: 4,
            open: 1,
            in_progress: 1,
            resolved: 1,
            closed: 1,
        };

        let overview = DashboardOverview::assemble(&customers, &bookings, &payments, &complaints);

        assert_eq!(overview.total_customers, 10);
        assert_eq!(overview.active_connections, 7);
        assert_eq!(overview.total_bookings, 12);
        assert_eq!(overview.pending_deliveries, 6);
        assert_eq!(overview.completed_deliveries, 5);
        assert_eq!(overview.total_revenue, Money::from_rupees(3612));
        assert_eq!(overview.open_complaints, 2);
    }
}
