//! Employee record.
//!
//! Staff share the contact shape with customers by composition. Employees
//! are plain records without a lifecycle store; the roster is small and
//! managed out of band.

use crate::domain::foundation::{ContactInfo, Describable, EmployeeId, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role an employee performs at the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    DeliveryPerson,
    CustomerSupport,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "Admin",
            UserRole::DeliveryPerson => "Delivery Person",
            UserRole::CustomerSupport => "Customer Support",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for this employee.
    pub id: EmployeeId,

    /// Name and contact details.
    pub contact: ContactInfo,

    /// Role at the agency.
    pub role: UserRole,

    /// Monthly salary.
    pub salary: Money,
}

impl Employee {
    pub fn new(id: EmployeeId, contact: ContactInfo, role: UserRole, salary: Money) -> Self {
        Self {
            id,
            contact,
            role,
            salary,
        }
    }
}

impl Describable for Employee {
    fn describe(&self) -> String {
        format!(
            "Employee {}\n  Name: {}\n  Phone: {}\n  Email: {}\n  Role: {}\n  Salary: {}",
            self.id,
            self.contact.name,
            self.contact.phone,
            self.contact.email,
            self.role,
            self.salary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_describes_role_and_salary() {
        let employee = Employee::new(
            EmployeeId::new("BG-EMP-001"),
            ContactInfo::new("Vikram Shet", "9898989898", "vikram@agency.in", "Depot Rd"),
            UserRole::DeliveryPerson,
            Money::from_rupees(22_000),
        );
        let text = employee.describe();
        assert!(text.contains("BG-EMP-001"));
        assert!(text.contains("Delivery Person"));
        assert!(text.contains("₹22000.00"));
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::CustomerSupport).unwrap(),
            "\"customer_support\""
        );
    }
}
