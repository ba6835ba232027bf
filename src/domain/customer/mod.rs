//! Customer records and the gas-connection lifecycle.

mod aggregate;
mod connection;

pub use aggregate::Customer;
pub use connection::{ConnectionKind, ConnectionStatus};
