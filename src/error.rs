//! Unified error types for chatsieve.
//!
//! A single [`ChatsieveError`] enum covers every failure the crate can
//! surface, following the pattern used by crates like `csv` and
//! `serde_json`.
//!
//! Parsing degradations are deliberately **not** errors: unresolved
//! timestamps and zero-match transcripts are reported as counts on
//! [`ParseOutcome`](crate::parsing::ParseOutcome) so a partially broken
//! transcript still yields whatever records it contains.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatsieve operations.
pub type Result<T> = std::result::Result<T, ChatsieveError>;

/// The error type for all chatsieve operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsieveError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contained no parsable text.
    ///
    /// Raised when the transcript file is empty or whitespace-only after
    /// permissive decoding. Fatal to the current request, not the process.
    #[error("No parsable text found in {}", path.display())]
    NoTextSource {
        /// The offending input path.
        path: PathBuf,
    },

    /// Invalid date string in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided.
        input: String,
        /// Expected format description.
        expected: &'static str,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatsieveError {
    /// Creates a no-text-source error for the given path.
    pub fn no_text_source(path: impl Into<PathBuf>) -> Self {
        ChatsieveError::NoTextSource { path: path.into() }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatsieveError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsieveError::Io(_))
    }

    /// Returns `true` if this is a no-text-source error.
    pub fn is_no_text_source(&self) -> bool {
        matches!(self, ChatsieveError::NoTextSource { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatsieveError::InvalidDate { .. })
    }

    /// The path the error refers to, when one is attached.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChatsieveError::NoTextSource { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatsieveError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_no_text_source_display() {
        let err = ChatsieveError::no_text_source("/tmp/empty.txt");
        let display = err.to_string();
        assert!(display.contains("No parsable text"));
        assert!(display.contains("/tmp/empty.txt"));
        assert_eq!(err.path().unwrap(), Path::new("/tmp/empty.txt"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatsieveError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatsieveError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_date());
        assert!(!io_err.is_no_text_source());
        assert!(io_err.path().is_none());

        let date_err = ChatsieveError::invalid_date("bad");
        assert!(date_err.is_invalid_date());
        assert!(!date_err.is_io());

        let src_err = ChatsieveError::no_text_source("x.txt");
        assert!(src_err.is_no_text_source());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatsieveError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = ChatsieveError::invalid_date("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
