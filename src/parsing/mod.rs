//! The transcript parsing pipeline.
//!
//! Processing is a strict, single-threaded pass over the input lines:
//!
//! ```text
//! normalize → header match → (later) timestamp resolve → assemble
//! ```
//!
//! - [`normalize`] strips locale whitespace artifacts per line
//! - [`header`] holds the ordered candidate table and the matcher
//! - [`datetime`] resolves matched date/time text into timestamps
//! - [`assembler`] drives the line-by-line state machine
//!
//! A parse pass is a pure function of its input text: no global state,
//! no I/O, so independent transcripts can be parsed concurrently without
//! coordination.
//!
//! # Example
//!
//! ```
//! use chatsieve::parsing::{default_candidates, parse_transcript, resolve_timestamps};
//!
//! let text = "12/05/23, 9:03 pm - Alice: hello\nworld\n12/05/23, 9:05 pm - Bob: hi";
//! let outcome = parse_transcript(text, &default_candidates());
//! assert_eq!(outcome.messages.len(), 2);
//! assert_eq!(outcome.messages[0].body(), "hello\nworld");
//!
//! let (messages, unresolved) = resolve_timestamps(outcome.messages);
//! assert_eq!(unresolved, 0);
//! assert!(messages[0].has_timestamp());
//! ```

pub mod assembler;
pub mod datetime;
pub mod header;
pub mod normalize;

pub use assembler::Assembler;
pub use datetime::{DATETIME_FORMATS, resolve_timestamp, resolve_timestamps};
pub use header::{HeaderCandidate, HeaderFields, default_candidates, match_header};
pub use normalize::normalize_line;

use crate::message::Message;

/// Result of one transcript parse pass.
///
/// Zero header matches is a reportable outcome, not an error: the
/// message list is simply empty and every input line counts as dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Parsed records in transcript order.
    pub messages: Vec<Message>,

    /// Lines encountered before the first header match, discarded.
    pub dropped_leading: usize,
}

impl ParseOutcome {
    /// Number of parsed records.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when no line matched any header candidate.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Parses raw transcript text into ordered message records.
///
/// Each line runs through normalization and the ordered candidate table;
/// header matches open records, everything else extends the current
/// record's body. Timestamps are **not** resolved here — feed the result
/// through [`resolve_timestamps`] next.
pub fn parse_transcript(raw_text: &str, candidates: &[HeaderCandidate]) -> ParseOutcome {
    let mut assembler = Assembler::new(candidates);
    for line in raw_text.lines() {
        assembler.feed_line(line);
    }
    assembler.finish()
}
