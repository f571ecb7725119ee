//! Dataset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid dataset JSON.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset declares no columns.
    #[error("Dataset has no columns")]
    NoColumns,

    /// A row has no usable `id` field.
    #[error("Row {0} has no id (expected a string or number `id` field)")]
    MissingId(usize),

    /// Two rows share an id.
    #[error("Duplicate row id '{0}'")]
    DuplicateId(String),

    /// The requested built-in record set does not exist.
    #[error("Unknown record set '{0}'")]
    UnknownRecordSet(String),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
