//! RegisterCustomerHandler - registers a new customer.

use std::sync::Arc;

use crate::domain::customer::{ConnectionKind, Customer};
use crate::domain::foundation::DomainError;
use crate::ports::{CustomerStore, NewCustomer};

/// Command to register a customer.
#[derive(Debug, Clone)]
pub struct RegisterCustomerCommand {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub connection_kind: ConnectionKind,
}

/// Handler for customer registration.
pub struct RegisterCustomerHandler {
    customers: Arc<dyn CustomerStore>,
}

impl RegisterCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    pub async fn handle(&self, cmd: RegisterCustomerCommand) -> Result<Customer, DomainError> {
        self.customers
            .create(NewCustomer {
                name: cmd.name,
                phone: cmd.phone,
                email: cmd.email,
                address: cmd.address,
                connection_kind: cmd.connection_kind,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{CounterIdIssuer, InMemoryCustomerStore};
    use crate::domain::foundation::ErrorCode;

    fn handler() -> RegisterCustomerHandler {
        let issuer = Arc::new(CounterIdIssuer::new());
        RegisterCustomerHandler::new(Arc::new(InMemoryCustomerStore::new(issuer)))
    }

    fn command() -> RegisterCustomerCommand {
        RegisterCustomerCommand {
            name: "Asha Rao".to_string(),
            phone: "9812345670".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 MG Road".to_string(),
            connection_kind: ConnectionKind::Domestic,
        }
    }

    #[tokio::test]
    async fn registers_customer_with_issued_id() {
        let handler = handler();
        let customer = handler.handle(command()).await.unwrap();
        assert_eq!(customer.id.as_str(), "BG-CUST-001");
        assert!(customer.is_active());
    }

    #[tokio::test]
    async fn rejects_invalid_name() {
        let handler = handler();
        let mut cmd = command();
        cmd.name = "X".to_string();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
