use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Column '{column}' not found in {table}")]
    MissingColumn { column: String, table: String },

    #[error("Duplicate column '{column}' in {table}")]
    DuplicateColumn { column: String, table: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
