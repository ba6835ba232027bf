//! UpdateCustomerHandler - edits a customer's contact details.

use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::{CustomerPatch, CustomerStore};

/// Command to update a customer's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateCustomerCommand {
    pub customer_id: CustomerId,
    pub patch: CustomerPatch,
}

/// Handler for customer updates.
pub struct UpdateCustomerHandler {
    customers: Arc<dyn CustomerStore>,
}

impl UpdateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    pub async fn handle(&self, cmd: UpdateCustomerCommand) -> Result<Customer, DomainError> {
        self.customers.update(&cmd.customer_id, cmd.patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{CounterIdIssuer, InMemoryCustomerStore};
    use crate::domain::customer::ConnectionKind;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::NewCustomer;

    async fn handler_with_customer() -> (UpdateCustomerHandler, Customer) {
        let issuer = Arc::new(CounterIdIssuer::new());
        let store = Arc::new(InMemoryCustomerStore::new(issuer));
        let customer = store
            .create(NewCustomer {
                name: "Asha Rao".to_string(),
                phone: "9812345670".to_string(),
                email: "asha@example.com".to_string(),
                address: "12 MG Road".to_string(),
                connection_kind: ConnectionKind::Domestic,
            })
            .await
            .unwrap();
        (UpdateCustomerHandler::new(store), customer)
    }

    #[tokio::test]
    async fn applies_partial_patch() {
        let (handler, customer) = handler_with_customer().await;
        let updated = handler
            .handle(UpdateCustomerCommand {
                customer_id: customer.id.clone(),
                patch: CustomerPatch {
                    address: Some("7 Lake View".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.contact.address, "7 Lake View");
        assert_eq!(updated.contact.name, "Asha Rao");
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found() {
        let (handler, _) = handler_with_customer().await;
        let err = handler
            .handle(UpdateCustomerCommand {
                customer_id: CustomerId::new("BG-CUST-404"),
                patch: CustomerPatch::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }
}
