//! The inventory store: one owned stock table and the operations over it.

use serde_json::Value;

use stockroom_core::{InputError, ItemName, StoreError, StoreResult, coerce};

use crate::activity::{LogEntry, LogSink};
use crate::config::{DEFAULT_LOW_THRESHOLD, StoreConfig};
use crate::outcome::{LowItems, Outcome};
use crate::table::StockTable;

/// In-memory stock store.
///
/// Each store owns its table; create as many as needed. Not synchronized:
/// callers must not share one store across threads without their own locking.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    pub(crate) table: StockTable,
    pub(crate) config: StoreConfig,
}

impl InventoryStore {
    /// Empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            table: StockTable::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Add `qty` to `item`, creating the entry at 0 first if absent.
    ///
    /// Rejects an empty or non-text item and a non-integer quantity. Negative
    /// quantities are accepted and may leave the entry at or below zero. On
    /// success an entry is appended to `log`, if given.
    pub fn add(
        &mut self,
        item: impl Into<Value>,
        qty: impl Into<Value>,
        log: Option<&mut dyn LogSink>,
    ) -> Outcome {
        let item = item.into();
        let qty = qty.into();

        let name = match ItemName::parse(&item) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("add called with invalid item: {item}");
                return Outcome::Skipped(e);
            }
        };
        let Some(delta) = coerce::to_int(&qty) else {
            tracing::warn!("add called with non-integer qty: {qty}");
            return Outcome::Skipped(InputError::InvalidQuantity(qty.to_string()));
        };

        let quantity = self.table.adjust(name.as_str(), delta);
        if let Some(sink) = log {
            sink.record(LogEntry::new(name.as_str(), delta));
        }

        Outcome::Applied {
            item: name.into_inner(),
            quantity,
        }
    }

    /// Subtract `qty` from `item`; the entry is deleted once it reaches zero or below.
    ///
    /// An absent item is reported as [`Outcome::NotFound`] and left absent.
    pub fn remove(&mut self, item: impl Into<Value>, qty: impl Into<Value>) -> Outcome {
        let item = item.into();
        let qty = qty.into();

        let Some(name) = coerce::as_text(&item) else {
            tracing::warn!("remove called with invalid item: {item}");
            return Outcome::Skipped(InputError::InvalidItem(item.to_string()));
        };
        let Some(delta) = coerce::to_int(&qty) else {
            tracing::warn!("remove called with non-integer qty: {qty}");
            return Outcome::Skipped(InputError::InvalidQuantity(qty.to_string()));
        };

        if !self.table.contains(name) {
            tracing::info!("remove: {name} not found in stock");
            return Outcome::NotFound {
                item: name.to_string(),
            };
        }

        let quantity = self.table.adjust(name, delta.saturating_neg());
        if quantity <= 0 {
            self.table.delete(name);
            return Outcome::Removed {
                item: name.to_string(),
            };
        }

        Outcome::Applied {
            item: name.to_string(),
            quantity,
        }
    }

    /// Stored quantity for `item`, or 0 when absent.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidArgument`] if `item` is not text.
    pub fn get_quantity(&self, item: impl Into<Value>) -> StoreResult<i64> {
        let item = item.into();
        let name = coerce::as_text(&item)
            .ok_or_else(|| StoreError::invalid_argument(format!("item name must be text, got {item}")))?;
        Ok(self.table.get(name).unwrap_or(0))
    }

    /// Items whose quantity is strictly below `threshold`, in table order.
    ///
    /// A non-integer threshold is logged and replaced by the default of 5.
    pub fn list_low(&self, threshold: impl Into<Value>) -> LowItems {
        let threshold = threshold.into();
        let (threshold, fell_back) = match coerce::to_int(&threshold) {
            Some(t) => (t, false),
            None => {
                tracing::warn!("list_low: invalid threshold {threshold}");
                (DEFAULT_LOW_THRESHOLD, true)
            }
        };

        let items = self
            .table
            .iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item.to_string())
            .collect();

        LowItems {
            items,
            threshold,
            fell_back,
        }
    }

    /// [`list_low`](Self::list_low) with the configured threshold.
    pub fn list_low_default(&self) -> LowItems {
        self.list_low(self.config.low_threshold)
    }
}
