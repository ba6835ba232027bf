//! Error types for the domain layer.
//!
//! Every condition here is recoverable: stores and handlers return these to
//! the presentation layer, which reports them and re-prompts. Nothing in the
//! core panics or retries.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lookup failures
    CustomerNotFound,
    BookingNotFound,
    PaymentNotFound,
    ComplaintNotFound,

    // Business preconditions
    NotEligible,

    // Input validation
    InvalidInput,

    // Lifecycle
    InvalidStateTransition,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            ErrorCode::BookingNotFound => "BOOKING_NOT_FOUND",
            ErrorCode::PaymentNotFound => "PAYMENT_NOT_FOUND",
            ErrorCode::ComplaintNotFound => "COMPLAINT_NOT_FOUND",
            ErrorCode::NotEligible => "NOT_ELIGIBLE",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
        };
        write!(f, "{}", s)
    }
}

impl ErrorCode {
    /// Returns true for the lookup-failure family of codes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::CustomerNotFound
                | ErrorCode::BookingNotFound
                | ErrorCode::PaymentNotFound
                | ErrorCode::ComplaintNotFound
        )
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Lookup failure for a customer identifier.
    pub fn customer_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::CustomerNotFound,
            format!("Customer not found: {}", id),
        )
    }

    /// Lookup failure for a booking identifier.
    pub fn booking_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::BookingNotFound,
            format!("Booking not found: {}", id),
        )
    }

    /// Lookup failure for a payment identifier.
    pub fn payment_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::PaymentNotFound,
            format!("Payment not found: {}", id),
        )
    }

    /// Lookup failure for a complaint identifier.
    pub fn complaint_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ComplaintNotFound,
            format!("Complaint not found: {}", id),
        )
    }

    /// Business precondition unmet (e.g. booking against an inactive connection).
    pub fn not_eligible(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotEligible, message)
    }

    /// Malformed or empty required field.
    pub fn invalid_input(field: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Invalid {}: {}", field, reason),
        )
    }

    /// Status change requested from a terminal or inapplicable state.
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidStateTransition, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::EmptyField { field } => {
                DomainError::invalid_input(field, "cannot be empty")
            }
            ValidationError::InvalidFormat { field, reason } => {
                DomainError::invalid_input(field, reason)
            }
        }
    }
}
