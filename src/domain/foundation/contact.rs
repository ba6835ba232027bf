//! Shared contact details for people known to the agency.
//!
//! Customers and employees share the same name/phone/email/address shape.
//! Rather than a base-class hierarchy, both embed [`ContactInfo`] by
//! composition and implement [`Describable`] for presentation.

use serde::{Deserialize, Serialize};

/// Name and contact details shared by customers and employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// One-line summary used in listings.
    pub fn summary(&self) -> String {
        format!("{} | {} | {}", self.name, self.phone, self.email)
    }
}

/// Capability for entities that can render a human-readable description.
///
/// Implemented by the record types the presentation layer prints in detail
/// views; the core never prints anything itself.
pub trait Describable {
    /// Multi-line human-readable description of the entity.
    fn describe(&self) -> String;
}
