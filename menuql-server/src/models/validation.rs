//! Validation error types

use std::fmt;

/// Validation error for request arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required argument was not supplied
    Missing { field: &'static str },

    /// Identifier is not a valid record id
    InvalidId { field: &'static str, value: String },

    /// None of the alternative lookup arguments were supplied
    NoLookupKey { fields: &'static [&'static str] },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidId { field, value } => {
                write!(f, "invalid {}: '{}' is not an integer id", field, value)
            }
            Self::NoLookupKey { fields } => {
                write!(f, "one of {} must be provided", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}
