//! Application layer: cross-store orchestration handlers.

pub mod handlers;
