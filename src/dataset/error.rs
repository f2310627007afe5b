//! Dataset loading error types
//!
//! Every variant is fatal at startup: the dashboard cannot render without data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the indicator table
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset URL could not be reached
    #[error("Failed to fetch dataset from {url}: {error}")]
    Fetch { url: String, error: String },

    /// The dataset URL answered with a non-success status
    #[error("Dataset request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The dataset file could not be read
    #[error("Failed to read dataset file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A field could not be parsed into its column type
    #[error("Line {line}: invalid {column} value {value:?}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The CSV parsed but contained no data rows
    #[error("Dataset contains no rows")]
    Empty,
}

/// Result type alias for dataset operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumn("gdpPercap");
        assert_eq!(err.to_string(), "Missing required column: gdpPercap");

        let err = LoadError::InvalidField {
            line: 4,
            column: "year",
            value: "19x2".to_string(),
        };
        assert_eq!(err.to_string(), "Line 4: invalid year value \"19x2\"");

        let err = LoadError::HttpStatus {
            url: "https://example.org/data.csv".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Dataset request to https://example.org/data.csv returned HTTP 404"
        );
    }
}
