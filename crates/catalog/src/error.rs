//! Error types for the catalog crate.
//!
//! thiserror derives `Display` and `Error` from the `#[error(...)]`
//! attributes; I/O and JSON errors convert automatically with `?`.

use thiserror::Error;

/// Errors that can occur while loading, parsing, or validating catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records in the same catalog share an id
    #[error("Duplicate id {id} in {catalog} catalog")]
    DuplicateId { catalog: &'static str, id: String },

    /// A record has an empty or whitespace-only id
    #[error("Empty id at position {position} in {catalog} catalog")]
    EmptyId { catalog: &'static str, position: usize },

    /// A vocabulary field had a value outside its closed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// A date was not in YYYY-MM-DD form
    #[error("Invalid date {value}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
