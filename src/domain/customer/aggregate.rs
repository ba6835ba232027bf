//! Customer aggregate entity.
//!
//! A customer is one gas connection: contact details, connection kind, a
//! connection status lifecycle, and an auxiliary index of booking
//! identifiers in insertion order.
//!
//! # Invariants
//!
//! - `id` is globally unique and assigned once at creation
//! - Status starts Active and only changes via the connection state machine
//! - `bookings` is a convenience index; the booking store owns the records

use crate::domain::foundation::{
    ContactInfo, CustomerId, Describable, DomainError, StateMachine, Timestamp,
};
use crate::domain::foundation::BookingId;
use serde::{Deserialize, Serialize};

use super::{ConnectionKind, ConnectionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for this customer.
    pub id: CustomerId,

    /// Name and contact details.
    pub contact: ContactInfo,

    /// Domestic or commercial connection.
    pub connection_kind: ConnectionKind,

    /// Current status in the connection lifecycle.
    pub connection_status: ConnectionStatus,

    /// When the customer registered.
    pub registered_at: Timestamp,

    /// Bookings placed by this customer, oldest first.
    pub bookings: Vec<BookingId>,
}

impl Customer {
    /// Creates a newly registered customer with an Active connection.
    pub fn new(id: CustomerId, contact: ContactInfo, connection_kind: ConnectionKind) -> Self {
        Self {
            id,
            contact,
            connection_kind,
            connection_status: ConnectionStatus::Active,
            registered_at: Timestamp::now(),
            bookings: Vec::new(),
        }
    }

    /// Returns true if the connection permits new bookings.
    pub fn is_active(&self) -> bool {
        self.connection_status.is_active()
    }

    /// Appends a booking reference to the auxiliary index.
    pub fn record_booking(&mut self, booking: BookingId) {
        self.bookings.push(booking);
    }

    /// Suspends the connection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the connection is Active.
    pub fn suspend(&mut self) -> Result<(), DomainError> {
        self.transition_to(ConnectionStatus::Suspended)
    }

    /// Reinstates a suspended connection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the connection is Suspended.
    pub fn reinstate(&mut self) -> Result<(), DomainError> {
        self.transition_to(ConnectionStatus::Active)
    }

    /// Deactivates the connection. Terminal; the record is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if already Inactive; callers that
    /// want idempotent deactivation check the status first.
    pub fn deactivate(&mut self) -> Result<(), DomainError> {
        self.transition_to(ConnectionStatus::Inactive)
    }

    fn transition_to(&mut self, target: ConnectionStatus) -> Result<(), DomainError> {
        self.connection_status = self
            .connection_status
            .transition_to(target)
            .map_err(|_| {
                DomainError::invalid_transition(format!(
                    "Cannot move connection {} from {} to {}",
                    self.id, self.connection_status, target
                ))
            })?;
        Ok(())
    }
}

impl Describable for Customer {
    fn describe(&self) -> String {
        format!(
            "Customer {}\n  Name: {}\n  Phone: {}\n  Email: {}\n  Address: {}\n  Connection: {} ({})\n  Registered: {}\n  Bookings: {}",
            self.id,
            self.contact.name,
            self.contact.phone,
            self.contact.email,
            self.contact.address,
            self.connection_kind,
            self.connection_status,
            self.registered_at.display_date(),
            self.bookings.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn test_customer() -> Customer {
        Customer::new(
            CustomerId::new("BG-CUST-001"),
            ContactInfo::new("Asha Rao", "9812345670", "asha@example.com", "12 MG Road"),
            ConnectionKind::Domestic,
        )
    }

    #[test]
    fn new_customer_starts_active_with_no_bookings() {
        let customer = test_customer();
        assert_eq!(customer.connection_status, ConnectionStatus::Active);
        assert!(customer.is_active());
        assert!(customer.bookings.is_empty());
    }

    #[test]
    fn record_booking_preserves_insertion_order() {
        let mut customer = test_customer();
        customer.record_booking(BookingId::new("BG-BK-001"));
        customer.record_booking(BookingId::new("BG-BK-002"));
        assert_eq!(
            customer.bookings,
            vec![BookingId::new("BG-BK-001"), BookingId::new("BG-BK-002")]
        );
    }

    #[test]
    fn suspend_then_reinstate_restores_active() {
        let mut customer = test_customer();
        customer.suspend().unwrap();
        assert_eq!(customer.connection_status, ConnectionStatus::Suspended);
        assert!(!customer.is_active());

        customer.reinstate().unwrap();
        assert!(customer.is_active());
    }

    #[test]
    fn deactivate_is_terminal() {
        let mut customer = test_customer();
        customer.deactivate().unwrap();
        assert_eq!(customer.connection_status, ConnectionStatus::Inactive);

        let err = customer.reinstate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn describe_includes_id_and_status() {
        let customer = test_customer();
        let text = customer.describe();
        assert!(text.contains("BG-CUST-001"));
        assert!(text.contains("Active"));
    }
}
