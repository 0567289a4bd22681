//! Core error types for tradejournal-core.
//!
//! This module defines the error hierarchy using thiserror. The analytics
//! engines themselves never fail; errors only arise at the storage and
//! configuration boundaries, or when validating user-supplied values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tradejournal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Snapshot-store errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Market-calendar loading errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot file
    #[error("Failed to write snapshot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for the expected schema
    #[error("Failed to parse snapshot at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Referenced habit does not exist in the snapshot
    #[error("Unknown habit id: {0}")]
    UnknownHabit(String),
}

/// Market-calendar loading errors.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Failed to read the calendar file
    #[error("Failed to read calendar at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Calendar file is not valid TOML for the expected schema
    #[error("Failed to parse calendar at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Two calendar rows share the same date
    #[error("Duplicate calendar entry for {0}")]
    DuplicateDate(chrono::NaiveDate),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Date string is not a valid YYYY-MM-DD calendar date
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Habit name is empty or whitespace
    #[error("Habit name must not be empty")]
    EmptyName,

    /// Unrecognized habit category name
    #[error("Unknown habit category '{value}'")]
    UnknownCategory { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
