//! Complaint store port.

use crate::domain::complaint::{Complaint, ComplaintStatus};
use crate::domain::customer::Customer;
use crate::domain::foundation::{ComplaintId, CustomerId, DomainError};
use async_trait::async_trait;
use serde::Serialize;

/// Per-status counts over the complaint collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintReport {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

/// Store port for customer complaints.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Files a complaint for the given customer.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the description is empty after trimming; the
    ///   store is unchanged in that case
    async fn file(&self, customer: &Customer, description: &str)
        -> Result<Complaint, DomainError>;

    /// Finds a complaint by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, DomainError>;

    /// All complaints in filing order.
    async fn list_all(&self) -> Result<Vec<Complaint>, DomainError>;

    /// Complaints filed by the given customer, in filing order.
    async fn list_by_customer(&self, customer_id: &CustomerId)
        -> Result<Vec<Complaint>, DomainError>;

    /// Complaints with the given status, in filing order.
    async fn list_by_status(&self, status: ComplaintStatus)
        -> Result<Vec<Complaint>, DomainError>;

    /// Marks a complaint as being worked on.
    ///
    /// # Errors
    ///
    /// - `ComplaintNotFound` if the identifier is unknown
    async fn mark_in_progress(&self, id: &ComplaintId) -> Result<Complaint, DomainError>;

    /// Resolves a complaint, stamping the resolution time.
    ///
    /// # Errors
    ///
    /// - `ComplaintNotFound` if the identifier is unknown
    async fn resolve(&self, id: &ComplaintId) -> Result<Complaint, DomainError>;

    /// Closes a complaint. This is the "delete" operation and is idempotent.
    ///
    /// # Errors
    ///
    /// - `ComplaintNotFound` if the identifier is unknown
    async fn close(&self, id: &ComplaintId) -> Result<Complaint, DomainError>;

    /// Per-status counts for reporting.
    async fn report(&self) -> Result<ComplaintReport, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ComplaintStore) {}
    }
}
