//! Ports: the contracts the core exposes to the presentation layer and the
//! collaborator contracts it consumes.

mod booking_store;
mod complaint_store;
mod customer_store;
mod id_issuer;
mod payment_store;

pub use booking_store::{BookingReport, BookingStore};
pub use complaint_store::{ComplaintReport, ComplaintStore};
pub use customer_store::{CustomerPatch, CustomerReport, CustomerStore, NewCustomer};
pub use id_issuer::{EntityKind, IdIssuer};
pub use payment_store::{ModeBreakdown, PaymentReport, PaymentStore};
