//! Identifier issuer port.
//!
//! Identifiers are human-readable: a fixed prefix per entity kind plus a
//! per-kind sequence number. The issuer is injected into each store so tests
//! can seed counters deterministically instead of relying on ambient
//! process-wide state.
//!
//! Sequences are rendered zero-padded to three digits and widen naturally
//! past 999 (`BG-CUST-999`, `BG-CUST-1000`); nothing is ever truncated.

use std::fmt;

/// The entity kinds that receive issued identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Booking,
    Payment,
    Complaint,
    Employee,
}

impl EntityKind {
    /// Fixed identifier prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Customer => "BG-CUST",
            EntityKind::Booking => "BG-BK",
            EntityKind::Payment => "BG-PAY",
            EntityKind::Complaint => "BG-CMP",
            EntityKind::Employee => "BG-EMP",
        }
    }

    /// Formats a sequence number in this kind's identifier format.
    pub fn format(&self, sequence: u32) -> String {
        format!("{}-{:03}", self.prefix(), sequence)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Customer => "customer",
            EntityKind::Booking => "booking",
            EntityKind::Payment => "payment",
            EntityKind::Complaint => "complaint",
            EntityKind::Employee => "employee",
        };
        write!(f, "{}", s)
    }
}

/// Issues unique identifiers, one independent sequence per entity kind.
///
/// Issuance cannot fail and is infallible by contract; implementations keep
/// one monotonically increasing counter per kind.
pub trait IdIssuer: Send + Sync {
    /// Returns the next identifier for the given kind.
    fn next(&self, kind: EntityKind) -> String;
}
