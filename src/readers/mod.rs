pub mod geography_reader;
pub mod occupation_reader;
pub mod table_reader;

pub use geography_reader::GeographyReader;
pub use occupation_reader::OccupationReader;
pub use table_reader::TableReader;

use std::fs::File;
use std::path::Path;

use crate::error::{ProcessingError, Result};

/// Open a CSV source, reporting a missing file distinctly from other I/O faults.
pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(ProcessingError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::Reader::from_path(path)?)
}

/// Header position lookup, case-insensitive.
pub(crate) fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}
