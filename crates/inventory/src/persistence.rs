//! JSON file persistence for the stock table.
//!
//! The file holds one JSON object mapping item names to integers. Loading
//! replaces the whole table; a missing or malformed file resets it to empty.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use serde_json::error::Category;

use stockroom_core::{StoreError, StoreResult, coerce};

use crate::outcome::LoadOutcome;
use crate::store::InventoryStore;
use crate::table::StockTable;

impl InventoryStore {
    /// Load from the configured path.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let path = self.config.path.clone();
        self.load_from(path)
    }

    /// Replace the table with the contents of `path`.
    ///
    /// # Errors
    ///
    /// I/O failures other than a missing file, including content that is not UTF-8
    /// (`ErrorKind::InvalidData`).
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> StoreResult<LoadOutcome> {
        let path = path.as_ref();

        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("load: {} not found", path.display());
                tracing::info!("starting with empty stock");
                self.table.clear();
                return Ok(LoadOutcome::MissingFile);
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| StoreError::io(path, e))?;
        drop(file);

        let text = std::str::from_utf8(&bytes)
            .map_err(|e| StoreError::io(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let table = parse_table(text);

        match table {
            Ok(table) => {
                let items = table.len();
                self.table = table;
                tracing::debug!("load: {items} item(s) from {}", path.display());
                Ok(LoadOutcome::Loaded { items })
            }
            Err(reason) => {
                tracing::error!("load: invalid JSON in {}: {reason}", path.display());
                self.table.clear();
                Ok(LoadOutcome::Malformed { reason })
            }
        }
    }

    /// Save to the configured path.
    pub fn save(&self) -> StoreResult<()> {
        self.save_to(&self.config.path)
    }

    /// Write the full table to `path` as a JSON object, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Any I/O failure, e.g. permission denied or a directory at `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &self.table).map_err(|e| {
            if e.is_io() {
                StoreError::io(path, io::Error::from(e))
            } else {
                StoreError::Serialize(e)
            }
        })?;
        writer.flush().map_err(|e| StoreError::io(path, e))?;

        tracing::debug!("save: {} item(s) to {}", self.table.len(), path.display());
        Ok(())
    }
}

/// Accept a top-level object whose values all coerce to integers, keeping key order.
fn parse_table(text: &str) -> Result<StockTable, String> {
    let map: IndexMap<String, Value> = match serde_json::from_str(text) {
        Ok(map) => map,
        Err(e) if e.classify() == Category::Data => {
            return Err(match serde_json::from_str::<Value>(text) {
                Ok(other) => format!("expected a JSON object, found {}", kind(&other)),
                Err(_) => e.to_string(),
            });
        }
        Err(e) => return Err(e.to_string()),
    };

    map.into_iter()
        .map(|(item, qty)| match coerce::to_int(&qty) {
            Some(n) => Ok((item, n)),
            None => Err(format!("quantity for {item:?} is not an integer: {qty}")),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
