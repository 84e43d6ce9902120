//! Filter parsed records by date range and sender.
//!
//! Filters combine with AND logic and are inclusive on both date bounds.
//! Records with unresolved timestamps are excluded whenever a date bound
//! is active; with no date bound they pass through untouched.
//!
//! # Examples
//!
//! ```
//! use chatsieve::filter::{FilterConfig, apply_filters};
//! use chatsieve::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "hello"),
//!     Message::new("Bob", "hi"),
//! ];
//!
//! // Case-insensitive exact sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! ```

use chrono::NaiveDate;

use crate::error::{ChatsieveError, Result};
use crate::message::Message;

/// Configuration for filtering records by date and sender.
///
/// An unset bound means "no constraint on that side" — equivalently, the
/// bound defaults to the earliest/latest timestamp present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this calendar date.
    pub from_date: Option<NaiveDate>,

    /// Include only records on or before this calendar date.
    pub to_date: Option<NaiveDate>,

    /// Include only records from this sender (trimmed, case-insensitive,
    /// exact).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates an empty configuration; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsieveError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.from_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsieveError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.to_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_from(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_to(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    /// Sets the sender filter.
    ///
    /// Matching trims surrounding whitespace and compares lowercased, so
    /// `"alice"` matches `"Alice"` but not `"Alice B"`.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.from_date.is_some() || self.to_date.is_some() || self.sender.is_some()
    }

    /// Returns `true` if a date bound is active.
    pub fn has_date_filter(&self) -> bool {
        self.from_date.is_some() || self.to_date.is_some()
    }

    /// Returns `true` if the sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        self.sender.is_some()
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatsieveError::invalid_date(date_str))
}

/// Filters records according to the configuration.
///
/// Pure and deterministic: returns the subsequence of records whose
/// timestamp date lies within the inclusive bounds and whose sender
/// matches, order preserved. If no filter is active the input is
/// returned unchanged, unresolved timestamps included.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    let wanted_sender = config
        .sender
        .as_ref()
        .map(|s| s.trim().to_lowercase());

    messages
        .into_iter()
        .filter(|msg| {
            if let Some(ref wanted) = wanted_sender {
                if msg.sender.trim().to_lowercase() != *wanted {
                    return false;
                }
            }

            if config.has_date_filter() {
                match msg.timestamp {
                    Some(ts) => {
                        let date = ts.date_naive();
                        if config.from_date.is_some_and(|from| date < from) {
                            return false;
                        }
                        if config.to_date.is_some_and(|to| date > to) {
                            return false;
                        }
                    }
                    // Unresolved timestamp: excluded from date-filtered views
                    None => return false,
                }
            }

            true
        })
        .collect()
}
