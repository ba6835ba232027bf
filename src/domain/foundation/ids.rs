//! Strongly-typed identifier value objects.
//!
//! Identifiers are human-readable strings in the agency's `BG-<KIND>-<SEQ>`
//! format, issued by an [`IdIssuer`](crate::ports::IdIssuer). Lookups treat
//! identifiers case-insensitively, matching how clerks type them in.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an issued identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Case-insensitive comparison against a raw identifier string.
            pub fn matches(&self, other: &str) -> bool {
                self.0.eq_ignore_ascii_case(other.trim())
            }

            /// Case-insensitive comparison against another identifier.
            pub fn eq_ignore_case(&self, other: &Self) -> bool {
                self.0.eq_ignore_ascii_case(&other.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a registered customer (`BG-CUST-NNN`).
    CustomerId
}

string_id! {
    /// Unique identifier for a cylinder-refill booking (`BG-BK-NNN`).
    BookingId
}

string_id! {
    /// Unique identifier for a recorded payment (`BG-PAY-NNN`).
    PaymentId
}

string_id! {
    /// Unique identifier for a filed complaint (`BG-CMP-NNN`).
    ComplaintId
}

string_id! {
    /// Unique identifier for an agency employee (`BG-EMP-NNN`).
    EmployeeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_displays_inner_string() {
        let id = CustomerId::new("BG-CUST-001");
        assert_eq!(id.to_string(), "BG-CUST-001");
    }

    #[test]
    fn matches_is_case_insensitive() {
        let id = BookingId::new("BG-BK-007");
        assert!(id.matches("bg-bk-007"));
        assert!(id.matches("  BG-BK-007  "));
        assert!(!id.matches("BG-BK-008"));
    }

    #[test]
    fn eq_ignore_case_compares_identifiers() {
        let a = PaymentId::new("BG-PAY-012");
        let b = PaymentId::new("bg-pay-012");
        assert!(a.eq_ignore_case(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn id_serializes_transparently() {
        let id = ComplaintId::new("BG-CMP-003");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"BG-CMP-003\"");
    }

    #[test]
    fn id_deserializes_from_plain_string() {
        let id: EmployeeId = serde_json::from_str("\"BG-EMP-001\"").unwrap();
        assert_eq!(id.as_str(), "BG-EMP-001");
    }
}
