//! Human-readable stock listing.

use std::io::{self, Write};

use crate::store::InventoryStore;

impl InventoryStore {
    /// Write an `Items Report` header and one `item -> qty` line per entry, in table order.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Items Report")?;
        for (item, qty) in self.table.iter() {
            writeln!(out, "{item} -> {qty}")?;
        }
        Ok(())
    }

    /// [`write_report`](Self::write_report) to standard output.
    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)?;
        out.flush()
    }
}
