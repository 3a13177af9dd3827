use std::path::Path;

use crate::error::Result;
use crate::models::Table;
use crate::readers::open_csv;

/// Reads any CSV file with a header row into a [`Table`], lower-casing every
/// column name on load. That is the sole normalization step: no trimming, no
/// type coercion, no validation beyond what later joins enforce.
pub struct TableReader;

impl TableReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_table(&self, path: &Path, name: &str) -> Result<Table> {
        let mut reader = open_csv(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let mut table = Table::new(name, headers)?;

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(|field| field.to_string()).collect())?;
        }

        tracing::debug!(
            table = name,
            rows = table.len(),
            columns = table.columns().len(),
            "loaded table"
        );

        Ok(table)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}
