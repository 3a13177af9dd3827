use std::path::Path;

use crate::error::Result;
use crate::models::Table;

/// Serializes a [`Table`] to a CSV file: header row first, one line per
/// record, field order equal to the table's column order.
pub struct CsvTableWriter;

impl CsvTableWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_table(&self, table: &Table, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        tracing::debug!(rows = table.len(), path = %path.display(), "wrote table");

        Ok(())
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new()
    }
}
