//! Error types for the Stocktake library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Stocktake operations.
#[derive(Debug, Error)]
pub enum StocktakeError {
    /// Unknown table or column.
    #[error("Schema error for '{table}': {message}")]
    Schema { table: String, message: String },

    /// Failure while reading from the store.
    #[error("Read error: {0}")]
    Read(String),

    /// Failure while writing to the store (constraint violation,
    /// type mismatch, connection loss mid-write).
    #[error("Write error: {0}")]
    Write(String),

    /// Malformed delimited input, or a row rejected by the target table.
    #[error("Import error: {0}")]
    Import(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StocktakeError {
    /// Convenience constructor for unknown-table errors.
    pub fn unknown_table(table: impl Into<String>) -> Self {
        StocktakeError::Schema {
            table: table.into(),
            message: "unknown table".to_string(),
        }
    }
}

/// Result type alias for Stocktake operations.
pub type Result<T> = std::result::Result<T, StocktakeError>;
