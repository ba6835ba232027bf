//! Shared value objects and contracts used across every domain module.

mod contact;
mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;
pub mod validation;

pub use contact::{ContactInfo, Describable};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BookingId, ComplaintId, CustomerId, EmployeeId, PaymentId};
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
