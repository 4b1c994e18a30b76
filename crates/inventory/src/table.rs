//! The stock table: item name to quantity, in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from item name to quantity.
///
/// Serializes as a flat JSON object. Removing an entry keeps the relative order
/// of the remaining ones; an item added again after removal goes to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockTable {
    entries: IndexMap<String, i64>,
}

impl StockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity stored for `item`, if present.
    pub fn get(&self, item: &str) -> Option<i64> {
        self.entries.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Add `delta` to the entry for `item`, starting from 0 if absent.
    /// Returns the new quantity.
    pub(crate) fn adjust(&mut self, item: &str, delta: i64) -> i64 {
        let slot = self.entries.entry(item.to_string()).or_insert(0);
        *slot = slot.saturating_add(delta);
        *slot
    }

    pub(crate) fn delete(&mut self, item: &str) -> Option<i64> {
        self.entries.shift_remove(item)
    }
}

impl FromIterator<(String, i64)> for StockTable {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StockTable {
    type Item = (&'a String, &'a i64);
    type IntoIter = indexmap::map::Iter<'a, String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
