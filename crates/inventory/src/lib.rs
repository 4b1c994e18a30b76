//! Inventory stock store.
//!
//! Keeps a mapping from item name to quantity, applies additions and removals,
//! persists the mapping as a JSON object and reports low stock.

pub mod activity;
pub mod config;
pub mod outcome;
pub mod persistence;
pub mod report;
pub mod store;
pub mod table;

pub use activity::{LogEntry, LogSink};
pub use config::{DEFAULT_FILE, DEFAULT_LOW_THRESHOLD, StoreConfig};
pub use outcome::{LoadOutcome, LowItems, Outcome};
pub use store::InventoryStore;
pub use table::StockTable;

pub use stockroom_core::{InputError, StoreError, StoreResult};
