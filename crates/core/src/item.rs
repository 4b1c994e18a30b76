//! Item names: the text keys of the stock table.

use serde_json::Value;

use crate::coerce;
use crate::error::InputError;

/// A validated, non-empty, case-sensitive item name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemName(String);

impl ItemName {
    /// Accept a loose value only if it is non-empty text. The text is kept verbatim.
    pub fn parse(value: &Value) -> Result<Self, InputError> {
        match coerce::as_text(value) {
            Some(s) if !s.is_empty() => Ok(Self(s.to_string())),
            _ => Err(InputError::InvalidItem(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
