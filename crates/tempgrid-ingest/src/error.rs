//! Error types for temperature data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a load. Row-level problems never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file structure.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header or no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("/data/weather.csv"),
        };
        assert_eq!(err.to_string(), "CSV file is empty: /data/weather.csv");
    }

    #[test]
    fn test_file_read_keeps_source() {
        let err = IngestError::FileRead {
            path: PathBuf::from("weather.csv"),
            source: std::io::Error::other("denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "failed to read file weather.csv: denied");
    }
}
