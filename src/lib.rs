//! Gas Agency CRM - Back-Office Record Keeping
//!
//! This crate implements the entity management and lifecycle layer for a
//! gas-distribution agency: customer registration, cylinder-refill bookings,
//! payments, and complaints, with status state machines and cross-entity
//! reporting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
