//! Complaint status.
//!
//! The complaint desk is deliberately permissive: any status may move to any
//! other, so a clerk can resolve straight from Open or reopen a closed
//! complaint. This mirrors the observed back-office behavior; do not tighten
//! it without a product decision.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    /// Returns true while the complaint still needs attention.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, ComplaintStatus::Open | ComplaintStatus::InProgress)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for ComplaintStatus {
    fn can_transition_to(&self, _target: &Self) -> bool {
        true
    }

    fn valid_transitions(&self) -> Vec<Self> {
        vec![
            ComplaintStatus::Open,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
        ]
    }
}
