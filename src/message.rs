//! The core message record produced by transcript parsing.
//!
//! A [`Message`] is created when a transcript line matches one of the
//! registered header patterns, grows while continuation lines are appended
//! to its body, and becomes effectively immutable once the next header
//! match (or end of input) closes it.
//!
//! # Examples
//!
//! ```
//! use chatsieve::Message;
//!
//! let msg = Message::new("Alice", "hello").with_raw_datetime("12/05/23, 9:03 PM");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "hello");
//! assert!(msg.timestamp().is_none()); // not resolved yet
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single parsed transcript message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name as captured, whitespace-trimmed |
/// | `body` | `String` | Message text, newline-joined across continuation lines |
/// | `timestamp` | `Option<DateTime<Utc>>` | Resolved header timestamp, `None` while unresolved or invalid |
/// | `raw_datetime` | `String` | The matched date/time text, kept for diagnostics |
///
/// The word count is deliberately **not** a field: it is derived data,
/// recomputed by [`word_count`](Self::word_count) on every export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Contains embedded newlines when the original message spanned
    /// multiple physical lines in the export.
    pub body: String,

    /// When the message was sent, once resolved.
    ///
    /// `None` either before [`resolve_timestamps`](crate::parsing::resolve_timestamps)
    /// runs, or permanently when the matched date/time text fits no known
    /// format string.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// The date/time text exactly as matched in the header line.
    ///
    /// Retained so unresolvable timestamps stay diagnosable.
    #[serde(default)]
    pub raw_datetime: String,
}

impl Message {
    /// Creates a new message with only sender and body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsieve::Message;
    ///
    /// let msg = Message::new("Alice", "hello");
    /// assert_eq!(msg.sender(), "Alice");
    /// assert!(msg.raw_datetime().is_empty());
    /// ```
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
            raw_datetime: String::new(),
        }
    }

    /// Builder method to set the matched date/time text.
    #[must_use]
    pub fn with_raw_datetime(mut self, raw: impl Into<String>) -> Self {
        self.raw_datetime = raw.into();
        self
    }

    /// Builder method to set the resolved timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the resolved timestamp, if any.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the raw matched date/time text.
    pub fn raw_datetime(&self) -> &str {
        &self.raw_datetime
    }

    /// Returns `true` once the header timestamp has been resolved.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Appends a continuation line to the body with a single `\n` separator.
    pub fn push_continuation(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    /// Number of whitespace-delimited tokens in the body.
    ///
    /// Derived on demand, never cached; an empty body counts 0.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new("", "")
    }
}
