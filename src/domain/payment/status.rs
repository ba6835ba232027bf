//! Payment status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a recorded payment.
///
/// Payments recorded at the counter are Completed immediately; Pending
/// exists for amounts awaiting settlement. Refunded is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

impl PaymentStatus {
    /// Returns true if the amount counts toward revenue.
    pub fn counts_toward_revenue(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Refunded => "Refunded",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, target),
            (Pending, Completed) | (Pending, Refunded) | (Completed, Refunded)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Pending => vec![Completed, Refunded],
            Completed => vec![Refunded],
            Refunded => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_can_refund() {
        assert!(PaymentStatus::Completed.can_transition_to(&PaymentStatus::Refunded));
    }

    #[test]
    fn refunded_is_terminal() {
        assert!(PaymentStatus::Refunded.is_terminal());
        assert!(!PaymentStatus::Refunded.can_transition_to(&PaymentStatus::Completed));
    }

    #[test]
    fn only_completed_counts_toward_revenue() {
        assert!(PaymentStatus::Completed.counts_toward_revenue());
        assert!(!PaymentStatus::Pending.counts_toward_revenue());
        assert!(!PaymentStatus::Refunded.counts_toward_revenue());
    }
}
