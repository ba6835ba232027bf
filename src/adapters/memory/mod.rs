//! In-memory adapters.
//!
//! Each store owns its collection behind an `Arc<RwLock<Vec<_>>>`; the store
//! is the sole mutator and is safe for concurrent callers. State lives for
//! the process lifetime only.

mod booking_store;
mod complaint_store;
mod customer_store;
mod id_issuer;
mod payment_store;

pub use booking_store::InMemoryBookingStore;
pub use complaint_store::InMemoryComplaintStore;
pub use customer_store::InMemoryCustomerStore;
pub use id_issuer::CounterIdIssuer;
pub use payment_store::InMemoryPaymentStore;
