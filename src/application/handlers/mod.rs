//! Command and query handlers consumed by the presentation layer.
//!
//! Each handler owns `Arc`s to the ports it needs and performs the
//! cross-entity checks the stores cannot do alone (e.g. resolving a
//! customer before booking).

mod book_cylinder;
mod file_complaint;
mod get_dashboard;
mod record_payment;
mod register_customer;
mod update_customer;

pub use book_cylinder::{BookCylinderCommand, BookCylinderHandler};
pub use file_complaint::{FileComplaintCommand, FileComplaintHandler};
pub use get_dashboard::GetDashboardHandler;
pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler};
pub use register_customer::{RegisterCustomerCommand, RegisterCustomerHandler};
pub use update_customer::{UpdateCustomerCommand, UpdateCustomerHandler};
