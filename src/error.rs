//! Error types for the ruwordnet library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RuWordNetError`] enum. Build-time problems (malformed records, bad
//! input files) are errors; an absent word or synset at query time is not
//! an error and is modeled as `Option`/empty results instead.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for ruwordnet operations.
#[derive(Error, Debug)]
pub enum RuWordNetError {
    /// I/O errors while reading record files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record is missing a required attribute or carries a malformed one.
    #[error("Record error: {0}")]
    Record(String),

    /// Index construction errors.
    #[error("Index error: {0}")]
    Index(String),

    /// Query errors (malformed query arguments, unknown tags).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RuWordNetError.
pub type Result<T> = std::result::Result<T, RuWordNetError>;

impl RuWordNetError {
    /// Create a new record error.
    pub fn record<S: Into<String>>(msg: S) -> Self {
        RuWordNetError::Record(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        RuWordNetError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        RuWordNetError::Query(msg.into())
    }
}
