//! In-memory complaint store.

use crate::domain::complaint::{Complaint, ComplaintStatus};
use crate::domain::customer::Customer;
use crate::domain::foundation::validation;
use crate::domain::foundation::{ComplaintId, CustomerId, DomainError};
use crate::ports::{ComplaintReport, ComplaintStore, EntityKind, IdIssuer};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Complaint store backed by an in-memory vector in filing order.
#[derive(Clone)]
pub struct InMemoryComplaintStore {
    complaints: Arc<RwLock<Vec<Complaint>>>,
    issuer: Arc<dyn IdIssuer>,
}

impl InMemoryComplaintStore {
    pub fn new(issuer: Arc<dyn IdIssuer>) -> Self {
        Self {
            complaints: Arc::new(RwLock::new(Vec::new())),
            issuer,
        }
    }

    async fn with_complaint<F>(&self, id: &ComplaintId, apply: F) -> Result<Complaint, DomainError>
    where
        F: FnOnce(&mut Complaint),
    {
        let mut complaints = self.complaints.write().await;
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::complaint_not_found(id))?;
        apply(complaint);
        Ok(complaint.clone())
    }
}

#[async_trait]
impl ComplaintStore for InMemoryComplaintStore {
    async fn file(
        &self,
        customer: &Customer,
        description: &str,
    ) -> Result<Complaint, DomainError> {
        if !validation::is_not_empty(description) {
            return Err(DomainError::invalid_input(
                "description",
                "cannot be empty",
            ));
        }

        let id = ComplaintId::new(self.issuer.next(EntityKind::Complaint));
        let complaint = Complaint::new(id, customer.id.clone(), description);

        let mut complaints = self.complaints.write().await;
        complaints.push(complaint.clone());
        info!(
            complaint_id = %complaint.id,
            customer_id = %complaint.customer_id,
            "complaint filed"
        );
        Ok(complaint)
    }

    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, DomainError> {
        let complaints = self.complaints.read().await;
        Ok(complaints.iter().find(|c| c.id.eq_ignore_case(id)).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Complaint>, DomainError> {
        Ok(self.complaints.read().await.clone())
    }

    async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Complaint>, DomainError> {
        let complaints = self.complaints.read().await;
        Ok(complaints
            .iter()
            .filter(|c| c.customer_id.eq_ignore_case(customer_id))
            .cloned()
            .collect())
    }

    async fn list_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<Vec<Complaint>, DomainError> {
        let complaints = self.complaints.read().await;
        Ok(complaints
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn mark_in_progress(&self, id: &ComplaintId) -> Result<Complaint, DomainError> {
        let complaint = self
            .with_complaint(id, |c| c.mark_in_progress())
            .await?;
        info!(complaint_id = %complaint.id, "complaint marked in progress");
        Ok(complaint)
    }

    async fn resolve(&self, id: &ComplaintId) -> Result<Complaint, DomainError> {
        let complaint = self.with_complaint(id, |c| c.resolve()).await?;
        info!(complaint_id = %complaint.id, "complaint resolved");
        Ok(complaint)
    }

    async fn close(&self, id: &ComplaintId) -> Result<Complaint, DomainError> {
        let complaint = self.with_complaint(id, |c| c.close()).await?;
        info!(complaint_id = %complaint.id, "complaint closed");
        Ok(complaint)
    }

    async fn report(&self) -> Result<ComplaintReport, DomainError> {
        let complaints = self.complaints.read().await;
        let mut report = ComplaintReport {
            total: complaints.len() as u64,
            ..Default::default()
        };
        for complaint in complaints.iter() {
            match complaint.status {
                ComplaintStatus::Open => report.open += 1,
                ComplaintStatus::InProgress => report.in_progress += 1,
                ComplaintStatus::Resolved => report.resolved += 1,
                ComplaintStatus::Closed => report.closed += 1,
            }
        }
        Ok(report)
    }
}
