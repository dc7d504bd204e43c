//! Error types for addressbook-core.
//!
//! Every fallible operation in this crate fails for exactly one reason:
//! a raw input value did not satisfy the format rule of the field it was
//! meant to become. `InvalidFormat` captures which rule was violated and
//! the offending input, so callers can surface a precise message.

use thiserror::Error;

/// A raw value was rejected by field validation.
///
/// Raised at construction time only; once a field exists it is valid for
/// its whole lifetime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidFormat {
    /// Contact name was empty (or whitespace-only input collapsed to empty)
    #[error("Contact name must not be empty.")]
    EmptyName,

    /// Phone value was not a string of exactly 10 decimal digits
    #[error("Phone number must be 10 digits.")]
    Phone { value: String },

    /// Birthday value did not parse as a real date in `DD.MM.YYYY` form
    #[error("Invalid date format. Use DD.MM.YYYY")]
    Birthday { value: String },
}

impl InvalidFormat {
    /// The raw input that failed validation, where one was involved.
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            InvalidFormat::EmptyName => None,
            InvalidFormat::Phone { value } | InvalidFormat::Birthday { value } => Some(value),
        }
    }
}

/// Result type alias for InvalidFormat
pub type Result<T, E = InvalidFormat> = std::result::Result<T, E>;
