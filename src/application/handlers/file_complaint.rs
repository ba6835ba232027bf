//! FileComplaintHandler - files a complaint for a customer.

use std::sync::Arc;

use crate::domain::complaint::Complaint;
use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::{ComplaintStore, CustomerStore};

/// Command to file a complaint.
#[derive(Debug, Clone)]
pub struct FileComplaintCommand {
    pub customer_id: CustomerId,
    pub description: String,
}

/// Handler for filing complaints.
pub struct FileComplaintHandler {
    customers: Arc<dyn CustomerStore>,
    complaints: Arc<dyn ComplaintStore>,
}

impl FileComplaintHandler {
    pub fn new(customers: Arc<dyn CustomerStore>, complaints: Arc<dyn ComplaintStore>) -> Self {
        Self {
            customers,
            complaints,
        }
    }

    /// Files the complaint.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    /// - `InvalidInput` if the description is empty after trimming
    pub async fn handle(&self, cmd: FileComplaintCommand) -> Result<Complaint, DomainError> {
        let customer = self
            .customers
            .find_by_id(&cmd.customer_id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(&cmd.customer_id))?;

        self.complaints.file(&customer, &cmd.description).await
    }
}
