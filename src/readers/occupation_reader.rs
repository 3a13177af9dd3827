use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::Occupation;
use crate::readers::{find_column, open_csv};

/// Reads the SOC occupation lookup (`oes_soc_occs.csv`) into typed rows.
pub struct OccupationReader;

impl OccupationReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_occupations(&self, path: &Path) -> Result<Vec<Occupation>> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers()?.clone();

        let soc_code = self.require_column(&headers, "soccode", path)?;
        let title = self.require_column(&headers, "title", path)?;
        let description = self.require_column(&headers, "description", path)?;

        let mut occupations = Vec::new();
        for record in reader.records() {
            let record = record?;
            occupations.push(Occupation::new(
                record[soc_code].to_string(),
                record[title].to_string(),
                record[description].to_string(),
            ));
        }

        tracing::debug!(rows = occupations.len(), "loaded occupation lookup");

        Ok(occupations)
    }

    fn require_column(
        &self,
        headers: &csv::StringRecord,
        name: &str,
        path: &Path,
    ) -> Result<usize> {
        find_column(headers, name).ok_or_else(|| ProcessingError::MissingColumn {
            column: name.to_string(),
            table: path.display().to_string(),
        })
    }
}

impl Default for OccupationReader {
    fn default() -> Self {
        Self::new()
    }
}
