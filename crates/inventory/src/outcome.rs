//! Results of mutating operations.
//!
//! Invalid input never raises; it is reported as [`Outcome::Skipped`] so callers
//! can tell a no-op from an applied change.

use stockroom_core::InputError;

/// What an `add` or `remove` call did to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The entry now holds `quantity`.
    Applied { item: String, quantity: i64 },
    /// The entry reached zero or below and was deleted.
    Removed { item: String },
    /// `remove` was called for an item that is not stocked.
    NotFound { item: String },
    /// The input was rejected; nothing changed.
    Skipped(InputError),
}

impl Outcome {
    /// True when the table was modified.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. } | Outcome::Removed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    pub fn input_error(&self) -> Option<&InputError> {
        match self {
            Outcome::Skipped(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// The file was parsed; the table now holds `items` entries.
    Loaded { items: usize },
    /// No file at the path; the table was reset to empty.
    MissingFile,
    /// The file was not a JSON object of integers; the table was reset to empty.
    Malformed { reason: String },
}

/// Items below a threshold, plus the threshold actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowItems {
    pub items: Vec<String>,
    pub threshold: i64,
    /// The requested threshold was not an integer and the default was used.
    pub fell_back: bool,
}

impl core::ops::Deref for LowItems {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<LowItems> for Vec<String> {
    fn from(value: LowItems) -> Self {
        value.items
    }
}
