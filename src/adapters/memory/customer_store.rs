//! In-memory customer store.

use crate::domain::customer::{ConnectionKind, ConnectionStatus, Customer};
use crate::domain::foundation::validation;
use crate::domain::foundation::{BookingId, ContactInfo, CustomerId, DomainError};
use crate::ports::{CustomerPatch, CustomerReport, CustomerStore, EntityKind, IdIssuer, NewCustomer};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Customer store backed by an in-memory vector in registration order.
#[derive(Clone)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<Vec<Customer>>>,
    issuer: Arc<dyn IdIssuer>,
}

impl InMemoryCustomerStore {
    pub fn new(issuer: Arc<dyn IdIssuer>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(Vec::new())),
            issuer,
        }
    }

    fn validate_new(new: &NewCustomer) -> Result<(), DomainError> {
        if !validation::is_valid_name(&new.name) {
            return Err(DomainError::invalid_input(
                "name",
                "expected 2-50 letters and spaces",
            ));
        }
        if !validation::is_valid_phone(&new.phone) {
            return Err(DomainError::invalid_input(
                "phone",
                "expected a 10-digit mobile number starting 6-9",
            ));
        }
        if !validation::is_valid_email(&new.email) {
            return Err(DomainError::invalid_input("email", "malformed address"));
        }
        if !validation::is_not_empty(&new.address) {
            return Err(DomainError::invalid_input("address", "cannot be empty"));
        }
        Ok(())
    }

    fn validate_patch(patch: &CustomerPatch) -> Result<(), DomainError> {
        if let Some(name) = &patch.name {
            if !validation::is_valid_name(name) {
                return Err(DomainError::invalid_input(
                    "name",
                    "expected 2-50 letters and spaces",
                ));
            }
        }
        if let Some(phone) = &patch.phone {
            if !validation::is_valid_phone(phone) {
                return Err(DomainError::invalid_input(
                    "phone",
                    "expected a 10-digit mobile number starting 6-9",
                ));
            }
        }
        if let Some(email) = &patch.email {
            if !validation::is_valid_email(email) {
                return Err(DomainError::invalid_input("email", "malformed address"));
            }
        }
        if let Some(address) = &patch.address {
            if !validation::is_not_empty(address) {
                return Err(DomainError::invalid_input("address", "cannot be empty"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, new: NewCustomer) -> Result<Customer, DomainError> {
        Self::validate_new(&new)?;

        let id = CustomerId::new(self.issuer.next(EntityKind::Customer));
        let contact = ContactInfo::new(
            new.name.trim(),
            new.phone.trim(),
            new.email.trim(),
            new.address.trim(),
        );
        let customer = Customer::new(id, contact, new.connection_kind);

        let mut customers = self.customers.write().await;
        customers.push(customer.clone());
        info!(customer_id = %customer.id, kind = %customer.connection_kind, "customer registered");
        Ok(customer)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id.eq_ignore_case(id)).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.customers.read().await.clone())
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<Customer>, DomainError> {
        let needle = needle.trim().to_lowercase();
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|c| c.contact.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &CustomerId, patch: CustomerPatch) -> Result<Customer, DomainError> {
        Self::validate_patch(&patch)?;

        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        if let Some(name) = patch.name {
            customer.contact.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            customer.contact.phone = phone.trim().to_string();
        }
        if let Some(email) = patch.email {
            customer.contact.email = email.trim().to_string();
        }
        if let Some(address) = patch.address {
            customer.contact.address = address.trim().to_string();
        }

        info!(customer_id = %customer.id, "customer updated");
        Ok(customer.clone())
    }

    async fn deactivate(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        if customer.connection_status == ConnectionStatus::Inactive {
            info!(customer_id = %customer.id, "customer already inactive");
            return Ok(customer.clone());
        }

        customer.deactivate()?;
        info!(customer_id = %customer.id, "customer connection deactivated");
        Ok(customer.clone())
    }

    async fn suspend(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        customer.suspend()?;
        warn!(customer_id = %customer.id, "customer connection suspended");
        Ok(customer.clone())
    }

    async fn reinstate(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        customer.reinstate()?;
        info!(customer_id = %customer.id, "customer connection reinstated");
        Ok(customer.clone())
    }

    async fn record_booking(
        &self,
        id: &CustomerId,
        booking: BookingId,
    ) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id.eq_ignore_case(id))
            .ok_or_else(|| DomainError::customer_not_found(id))?;

        customer.record_booking(booking);
        Ok(())
    }

    async fn list_by_status(
        &self,
        status: ConnectionStatus,
    ) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|c| c.connection_status == status)
            .cloned()
            .collect())
    }

    async fn list_by_kind(&self, kind: ConnectionKind) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers
            .iter()
            .filter(|c| c.connection_kind == kind)
            .cloned()
            .collect())
    }

    async fn report(&self) -> Result<CustomerReport, DomainError> {
        let customers = self.customers.read().await;
        let mut report = CustomerReport {
            total: customers.len() as u64,
            ..Default::default()
        };
        for customer in customers.iter() {
            match customer.connection_status {
                ConnectionStatus::Active => report.active += 1,
                ConnectionStatus::Inactive => report.inactive += 1,
                ConnectionStatus::Suspended => report.suspended += 1,
            }
            match customer.connection_kind {
                ConnectionKind::Domestic => report.domestic += 1,
                ConnectionKind::Commercial => report.commercial += 1,
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::CounterIdIssuer;
    use crate::domain::foundation::ErrorCode;

    fn store() -> InMemoryCustomerStore {
        InMemoryCustomerStore::new(Arc::new(CounterIdIssuer::new()))
    }

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            phone: "9812345670".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 MG Road".to_string(),
            connection_kind: ConnectionKind::Domestic,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_active_status() {
        let store = store();
        let first = store.create(new_customer("Asha Rao")).await.unwrap();
        let second = store.create(new_customer("Ravi Kumar")).await.unwrap();

        assert_eq!(first.id.as_str(), "BG-CUST-001");
        assert_eq!(second.id.as_str(), "BG-CUST-002");
        assert!(first.is_active());
    }

    #[tokio::test]
    async fn create_rejects_bad_phone_without_storing() {
        let store = store();
        let mut bad = new_customer("Asha Rao");
        bad.phone = "12345".to_string();

        let err = store.create(bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_is_case_insensitive() {
        let store = store();
        store.create(new_customer("Asha Rao")).await.unwrap();

        let found = store
            .find_by_id(&CustomerId::new("bg-cust-001"))
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let store = store();
        let found = store
            .find_by_id(&CustomerId::new("BG-CUST-404"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn search_by_name_matches_substring_case_insensitively() {
        let store = store();
        store.create(new_customer("Asha Rao")).await.unwrap();
        store.create(new_customer("Ravi Kumar")).await.unwrap();
        store.create(new_customer("Prasha Nair")).await.unwrap();

        let hits = store.search_by_name("SHA").await.unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.contact.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rao", "Prasha Nair"]);
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields() {
        let store = store();
        let created = store.create(new_customer("Asha Rao")).await.unwrap();

        let patch = CustomerPatch {
            phone: Some("9000000001".to_string()),
            ..Default::default()
        };
        let updated = store.update(&created.id, patch).await.unwrap();

        assert_eq!(updated.contact.phone, "9000000001");
        assert_eq!(updated.contact.name, "Asha Rao");
        assert_eq!(updated.contact.email, "asha@example.com");
    }

    #[tokio::test]
    async fn update_with_invalid_field_changes_nothing() {
        let store = store();
        let created = store.create(new_customer("Asha Rao")).await.unwrap();

        let patch = CustomerPatch {
            name: Some("Good Name".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let err = store.update(&created.id, patch).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let unchanged = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(unchanged.contact.name, "Asha Rao");
    }

    #[tokio::test]
    async fn update_unknown_customer_is_not_found() {
        let store = store();
        let err = store
            .update(&CustomerId::new("BG-CUST-404"), CustomerPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[tokio::test]
    async fn deactivate_twice_is_a_no_op_success() {
        let store = store();
        let created = store.create(new_customer("Asha Rao")).await.unwrap();

        let first = store.deactivate(&created.id).await.unwrap();
        assert_eq!(first.connection_status, ConnectionStatus::Inactive);

        let second = store.deactivate(&created.id).await.unwrap();
        assert_eq!(second.connection_status, ConnectionStatus::Inactive);
    }

    #[tokio::test]
    async fn suspend_then_reinstate_round_trips() {
        let store = store();
        let created = store.create(new_customer("Asha Rao")).await.unwrap();

        let suspended = store.suspend(&created.id).await.unwrap();
        assert_eq!(suspended.connection_status, ConnectionStatus::Suspended);

        let reinstated = store.reinstate(&created.id).await.unwrap();
        assert!(reinstated.is_active());
    }

    #[tokio::test]
    async fn reinstate_active_customer_is_invalid_transition() {
        let store = store();
        let created = store.create(new_customer("Asha Rao")).await.unwrap();

        let err = store.reinstate(&created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn list_filters_preserve_insertion_order() {
        let store = store();
        store.create(new_customer("Asha Rao")).await.unwrap();
        let second = store.create(new_customer("Ravi Kumar")).await.unwrap();
        store.create(new_customer("Meera Iyer")).await.unwrap();
        store.deactivate(&second.id).await.unwrap();

        let active = store
            .list_by_status(ConnectionStatus::Active)
            .await
            .unwrap();
        let names: Vec<_> = active.iter().map(|c| c.contact.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rao", "Meera Iyer"]);
    }

    #[tokio::test]
    async fn report_counts_statuses_and_kinds() {
        let store = store();
        store.create(new_customer("Asha Rao")).await.unwrap();
        let second = store
            .create(NewCustomer {
                connection_kind: ConnectionKind::Commercial,
                ..new_customer("Hotel Blue")
            })
            .await
            .unwrap();
        store.suspend(&second.id).await.unwrap();

        let report = store.report().await.unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.active, 1);
        assert_eq!(report.suspended, 1);
        assert_eq!(report.domestic, 1);
        assert_eq!(report.commercial, 1);
    }
}
