//! Gas-connection kind and status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of gas connection a customer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Domestic,
    Commercial,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionKind::Domestic => "Domestic",
            ConnectionKind::Commercial => "Commercial",
        };
        write!(f, "{}", s)
    }
}

/// Status of a customer's standing with the agency.
///
/// New connections start Active. Suspension is reversible; deactivation is
/// the terminal "delete" marker; the record itself is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Connection in good standing; eligible for bookings.
    Active,

    /// Connection switched off permanently. Not eligible for bookings.
    Inactive,

    /// Temporarily barred (e.g. pending document verification).
    Suspended,
}

impl ConnectionStatus {
    /// Returns true if this status permits new bookings.
    pub fn is_active(&self) -> bool {
        matches!(self, ConnectionStatus::Active)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionStatus::Active => "Active",
            ConnectionStatus::Inactive => "Inactive",
            ConnectionStatus::Suspended => "Suspended",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for ConnectionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConnectionStatus::*;
        matches!(
            (self, target),
            (Active, Suspended) | (Active, Inactive) | (Suspended, Active) | (Suspended, Inactive)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConnectionStatus::*;
        match self {
            Active => vec![Suspended, Inactive],
            Suspended => vec![Active, Inactive],
            Inactive => vec![],
        }
    }
}
