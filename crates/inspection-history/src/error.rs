//! Error types for inspection-history.
//!
//! This module defines all error types used throughout the inspection-history
//! crate, providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for inspection-history operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Query Errors ===
    /// A month outside `1..=12` was requested.
    #[error("invalid month {month} for year {year}: expected a value between 1 and 12")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The out-of-range month.
        month: u32,
    },

    /// A year outside the range the calendar can represent.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
    },

    /// A `YYYY-MM` month string could not be parsed.
    #[error("invalid month '{value}': expected YYYY-MM")]
    MonthParse {
        /// The offending input.
        value: String,
    },

    // === Dataset Errors ===
    /// A record carries a date that is not a valid calendar date.
    #[error("inspection #{index} has an invalid date '{value}': {source}")]
    InvalidDate {
        /// Position of the record in the source list.
        index: usize,
        /// The raw date text.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A record carries a status outside the known set.
    #[error("inspection #{index} has an unknown status '{value}'")]
    InvalidStatus {
        /// Position of the record in the source list.
        index: usize,
        /// The raw status text.
        value: String,
    },

    /// A status string did not name a known status.
    #[error("unknown inspection status '{0}': expected Satisfactory, Pending or Failed")]
    UnknownStatus(String),

    /// Failed to read a dataset file.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetRead {
        /// Path to the dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for inspection-history operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a config validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
