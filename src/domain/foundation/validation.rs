//! Pure predicate functions over input strings.
//!
//! Stateless shape checks consumed by the stores before accepting customer
//! fields. All predicates trim their input first.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]{2,50}$").expect("valid name pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone pattern"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("valid email pattern"));

/// Validates a person's name (alphabets and spaces, 2-50 chars).
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name.trim())
}

/// Validates an Indian mobile number (10 digits starting with 6-9).
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

/// Validates an email address format.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Checks that a string is non-empty after trimming.
pub fn is_not_empty(s: &str) -> bool {
    !s.trim().is_empty()
}
