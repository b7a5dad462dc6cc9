//! Single menu item lookup selector

use super::{RecordId, ValidationError};

/// How `menuItem(id, name)` finds its record.
///
/// `id` wins when both are given. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemLookup {
    ById(RecordId),
    ByName(String),
}

impl MenuItemLookup {
    pub fn from_args(id: Option<&str>, name: Option<String>) -> Result<Self, ValidationError> {
        if let Some(id) = id.filter(|s| !s.is_empty()) {
            return Ok(Self::ById(RecordId::parse("id", id)?));
        }

        match name.filter(|s| !s.is_empty()) {
            Some(name) => Ok(Self::ByName(name)),
            None => Err(ValidationError::NoLookupKey {
                fields: &["id", "name"],
            }),
        }
    }
}
