//! Record identifiers
//!
//! GraphQL carries ids as opaque strings; storage keys are integers.

use std::fmt;

use super::ValidationError;

/// Validated integer primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i64);

impl RecordId {
    /// Parse an id argument, naming `field` in the error on failure.
    ///
    /// # Example
    /// ```
    /// use menuql_server::models::RecordId;
    ///
    /// assert_eq!(RecordId::parse("id", "42").unwrap().get(), 42);
    /// assert!(RecordId::parse("id", "forty-two").is_err());
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                field,
                value: raw.to_owned(),
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
