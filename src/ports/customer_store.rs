//! Customer store port.
//!
//! The store owns the customer collection and is its sole mutator. Records
//! are never removed; deactivation is a status transition that preserves
//! history.

use crate::domain::customer::{ConnectionKind, ConnectionStatus, Customer};
use crate::domain::foundation::{BookingId, CustomerId, DomainError};
use async_trait::async_trait;
use serde::Serialize;

/// Fields required to register a customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub connection_kind: ConnectionKind,
}

/// Partial update of a customer's mutable fields.
///
/// Unspecified fields are left unchanged; each provided field is revalidated
/// individually before anything is applied.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CustomerPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}

/// Aggregate counts over the customer collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerReport {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub suspended: u64,
    pub domestic: u64,
    pub commercial: u64,
}

/// Store port for customer records.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Registers a new customer with an Active connection.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if name, phone, or email fail shape validation
    async fn create(&self, new: NewCustomer) -> Result<Customer, DomainError>;

    /// Finds a customer by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// All customers in registration order.
    async fn list_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Customers whose name contains the needle, case-insensitively.
    async fn search_by_name(&self, needle: &str) -> Result<Vec<Customer>, DomainError>;

    /// Applies a partial update to the mutable contact fields.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    /// - `InvalidInput` if any provided field fails revalidation; nothing
    ///   is applied in that case
    async fn update(&self, id: &CustomerId, patch: CustomerPatch) -> Result<Customer, DomainError>;

    /// Deactivates the connection. Idempotent: deactivating an already
    /// Inactive customer is a no-op success.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    async fn deactivate(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Suspends an Active connection.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    /// - `InvalidStateTransition` unless the connection is Active
    async fn suspend(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Reinstates a Suspended connection to Active.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    /// - `InvalidStateTransition` unless the connection is Suspended
    async fn reinstate(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Appends a booking reference to the customer's auxiliary index.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the identifier is unknown
    async fn record_booking(&self, id: &CustomerId, booking: BookingId)
        -> Result<(), DomainError>;

    /// Customers with the given connection status, in registration order.
    async fn list_by_status(&self, status: ConnectionStatus)
        -> Result<Vec<Customer>, DomainError>;

    /// Customers with the given connection kind, in registration order.
    async fn list_by_kind(&self, kind: ConnectionKind) -> Result<Vec<Customer>, DomainError>;

    /// Aggregate counts for reporting.
    async fn report(&self) -> Result<CustomerReport, DomainError>;
}
