//! `stockroom-core` — primitives shared by the stock store.
//!
//! Pure building blocks: the error model, loose-value coercion and item names.
//! No I/O lives here.

pub mod coerce;
pub mod error;
pub mod item;

pub use error::{InputError, StoreError, StoreResult};
pub use item::ItemName;
