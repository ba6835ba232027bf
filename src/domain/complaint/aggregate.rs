//! Complaint aggregate entity.
//!
//! # Invariants
//!
//! - `description` is non-empty after trimming (enforced at filing)
//! - `resolved_at` is stamped when the complaint is resolved
//! - Status moves are unrestricted; see the status module

use crate::domain::foundation::{ComplaintId, CustomerId, Describable, Timestamp};
use serde::{Deserialize, Serialize};

use super::ComplaintStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Unique identifier for this complaint.
    pub id: ComplaintId,

    /// Customer who filed the complaint.
    pub customer_id: CustomerId,

    /// Free-text description, trimmed.
    pub description: String,

    /// Current handling status.
    pub status: ComplaintStatus,

    /// When the complaint was filed.
    pub filed_at: Timestamp,

    /// When the complaint was resolved, if it has been.
    pub resolved_at: Option<Timestamp>,
}

impl Complaint {
    /// Creates a newly filed complaint in Open status.
    ///
    /// The caller is responsible for rejecting empty descriptions; the
    /// stored description is trimmed here.
    pub fn new(id: ComplaintId, customer_id: CustomerId, description: &str) -> Self {
        Self {
            id,
            customer_id,
            description: description.trim().to_string(),
            status: ComplaintStatus::Open,
            filed_at: Timestamp::now(),
            resolved_at: None,
        }
    }

    /// Marks the complaint as being worked on.
    pub fn mark_in_progress(&mut self) {
        self.status = ComplaintStatus::InProgress;
    }

    /// Resolves the complaint and stamps the resolution time.
    pub fn resolve(&mut self) {
        self.status = ComplaintStatus::Resolved;
        self.resolved_at = Some(Timestamp::now());
    }

    /// Closes the complaint. This is the "delete" operation; the record stays.
    pub fn close(&mut self) {
        self.status = ComplaintStatus::Closed;
    }
}

impl Describable for Complaint {
    fn describe(&self) -> String {
        let resolved = self
            .resolved_at
            .map(|ts| ts.display_date())
            .unwrap_or_else(|| "Not yet resolved".to_string());
        format!(
            "Complaint {}\n  Customer: {}\n  Description: {}\n  Status: {}\n  Filed: {}\n  Resolved: {}",
            self.id,
            self.customer_id,
            self.description,
            self.status,
            self.filed_at.display_date(),
            resolved,
        )
    }
}
