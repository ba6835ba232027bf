//! Agency staff records.

mod aggregate;

pub use aggregate::{Employee, UserRole};
