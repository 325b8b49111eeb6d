//! Error types for `libris-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for libris operations.
#[derive(Error, Debug)]
pub enum LibrisError {
    // === Policy Violations ===
    /// No record in the catalog is available.
    #[error("No books are available")]
    NoAvailableBooks,

    /// No record in the catalog is out on loan.
    #[error("No books are taken")]
    NoTakenBooks,

    /// The borrower already holds the maximum number of books.
    #[error("Person {person} already took {limit} books")]
    PersonAtCap { person: String, limit: usize },

    /// Requested loan period is outside the allowed range.
    #[error("Loan period must be between 1 and {max} days, got {days}")]
    LoanTooLong { days: i64, max: i64 },

    /// No available record with the given ISBN.
    #[error("Book with ISBN {isbn} is not available")]
    BookNotAvailable { isbn: String },

    /// No taken record with the given ISBN.
    #[error("Book with ISBN {isbn} is not taken")]
    BookNotTaken { isbn: String },

    /// The named person is not the recorded borrower.
    #[error("Person {person} doesn't have book with ISBN {isbn}")]
    WrongBorrower { isbn: String, person: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Storage Errors ===
    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Catalog file not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LibrisError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for recoverable circulation-rule failures. The caller decides
    /// whether to re-prompt or abort; no state was changed.
    #[must_use]
    pub const fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            Self::NoAvailableBooks
                | Self::NoTakenBooks
                | Self::PersonAtCap { .. }
                | Self::LoanTooLong { .. }
                | Self::BookNotAvailable { .. }
                | Self::BookNotTaken { .. }
                | Self::WrongBorrower { .. }
        )
    }

    /// True when the persistence gateway failed. An in-memory mutation may
    /// have succeeded without being made durable.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::FileNotFound(_) | Self::Io(_) | Self::Json(_)
        )
    }
}

/// Result type using `LibrisError`.
pub type Result<T> = std::result::Result<T, LibrisError>;
