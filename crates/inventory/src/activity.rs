//! Caller-supplied activity log for stock additions.

use chrono::{DateTime, Local};

/// One recorded addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub item: String,
    pub quantity: i64,
}

impl LogEntry {
    pub fn new(item: impl Into<String>, quantity: i64) -> Self {
        Self {
            at: Local::now(),
            item: item.into(),
            quantity,
        }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}

/// Destination for activity entries. Append-only; the store never reads it back.
pub trait LogSink {
    fn record(&mut self, entry: LogEntry);
}

impl LogSink for Vec<String> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry.to_string());
    }
}

impl LogSink for Vec<LogEntry> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_renders_timestamp_and_action() {
        let entry = LogEntry {
            at: Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            item: "apple".to_string(),
            quantity: 10,
        };
        assert_eq!(entry.to_string(), "2024-03-01 09:30:00.000000: Added 10 of apple");
    }

    #[test]
    fn string_sink_stores_rendered_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.record(LogEntry::new("pear", 3));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(": Added 3 of pear"));
    }
}
