use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::CountyRecord;
use crate::readers::{find_column, open_csv};

/// Reads the front-end geography CSV (`geography.csv`) into typed rows,
/// preserving source order.
pub struct GeographyReader;

impl GeographyReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_counties(&self, path: &Path) -> Result<Vec<CountyRecord>> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers()?.clone();

        let state = find_column(&headers, "state").ok_or_else(|| {
            ProcessingError::MissingColumn {
                column: "state".to_string(),
                table: path.display().to_string(),
            }
        })?;
        let county_town = find_column(&headers, "countytownname").ok_or_else(|| {
            ProcessingError::MissingColumn {
                column: "countytownname".to_string(),
                table: path.display().to_string(),
            }
        })?;

        let mut counties = Vec::new();
        for record in reader.records() {
            let record = record?;
            counties.push(CountyRecord::new(
                record[state].to_string(),
                record[county_town].to_string(),
            ));
        }

        tracing::debug!(rows = counties.len(), "loaded geography rows");

        Ok(counties)
    }
}

impl Default for GeographyReader {
    fn default() -> Self {
        Self::new()
    }
}
