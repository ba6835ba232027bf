//! Booking status state machine.
//!
//! Delivery progress is a single enumerated field rather than a flag set:
//! it has more than two meaningful states and drives both the dashboard and
//! payment eligibility.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a cylinder-refill booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Placed, awaiting confirmation.
    Pending,

    /// Confirmed by the agency.
    Confirmed,

    /// Loaded on a delivery vehicle.
    OutForDelivery,

    /// Handed over to the customer. Terminal.
    Delivered,

    /// Abandoned before delivery. Terminal.
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::OutForDelivery => "Out for Delivery",
            BookingStatus::Delivered => "Delivered",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for BookingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            // Forward progress
            (Pending, Confirmed)
                | (Confirmed, OutForDelivery)
                | (OutForDelivery, Delivered)
            // Cancellation from any non-terminal state
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (OutForDelivery, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![OutForDelivery, Cancelled],
            OutForDelivery => vec![Delivered, Cancelled],
            Delivered => vec![],
            Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_path_is_pending_confirmed_out_delivered() {
        let status = BookingStatus::Pending
            .transition_to(BookingStatus::Confirmed)
            .unwrap();
        let status = status.transition_to(BookingStatus::OutForDelivery).unwrap();
        let status = status.transition_to(BookingStatus::Delivered).unwrap();
        assert_eq!(status, BookingStatus::Delivered);
    }

    #[test]
    fn skipping_states_is_rejected() {
        assert!(BookingStatus::Pending
            .transition_to(BookingStatus::Delivered)
            .is_err());
        assert!(BookingStatus::Pending
            .transition_to(BookingStatus::OutForDelivery)
            .is_err());
    }

    #[test]
    fn every_non_terminal_state_can_cancel() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::OutForDelivery,
        ] {
            assert!(status.can_transition_to(&BookingStatus::Cancelled));
        }
    }

    #[test]
    fn delivered_and_cancelled_are_terminal() {
        assert!(BookingStatus::Delivered.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn cancelled_cannot_resume() {
        assert!(BookingStatus::Cancelled
            .transition_to(BookingStatus::Confirmed)
            .is_err());
    }
}
