//! # chatsieve
//!
//! A Rust library for extracting structured message records from exported
//! chat transcripts in the loose `date, time - sender: message` line
//! format, where a message may span multiple physical lines.
//!
//! ## Overview
//!
//! The pipeline runs strictly one line at a time:
//!
//! 1. **Normalize** — strip locale whitespace artifacts (narrow no-break
//!    space, no-break space) and trim the line
//! 2. **Match** — try an ordered table of header patterns; first match wins
//! 3. **Assemble** — header matches open records, everything else extends
//!    the current record's body
//! 4. **Resolve** — convert matched date/time text to timestamps through a
//!    fixed list of format strings (day-first for ambiguous dates)
//! 5. **Filter** — optional inclusive date range and exact
//!    case-insensitive sender
//! 6. **Project** — tabular rows with a derived word-count column
//!
//! Parsing never aborts on bad data: unresolvable timestamps and
//! zero-match transcripts degrade to counts, not errors.
//!
//! ## Quick start
//!
//! ```rust
//! use chatsieve::prelude::*;
//!
//! let text = "12/05/23, 9:03 pm - Alice: hello\nworld\n12/05/23, 9:05 pm - Bob: hi";
//!
//! let outcome = parse_transcript(text, &default_candidates());
//! let (messages, unresolved) = resolve_timestamps(outcome.messages);
//! assert_eq!(unresolved, 0);
//!
//! let filtered = apply_filters(messages, &FilterConfig::new().with_sender("alice"));
//! let rows = project_for_export(&filtered);
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].body, "hello\nworld");
//! assert_eq!(rows[0].word_count, 2);
//! ```
//!
//! ## Module structure
//!
//! - [`parsing`] — normalizer, header matcher, timestamp resolver, assembler
//! - [`filter`] — [`FilterConfig`](filter::FilterConfig), [`apply_filters`](filter::apply_filters)
//! - [`export`] — [`ExportRow`](export::ExportRow), [`project_for_export`](export::project_for_export), CSV writers
//! - [`source`] — permissive byte decoding boundary
//! - [`config`] — decoding policy configuration
//! - [`error`] — unified error types ([`ChatsieveError`], [`Result`])
//! - [`cli`] — CLI argument types (binary only)

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod message;
pub mod parsing;
pub mod source;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsieveError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsieve::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatsieveError, Result};

    pub use crate::parsing::{
        HeaderCandidate, ParseOutcome, default_candidates, parse_transcript, resolve_timestamps,
    };

    pub use crate::filter::{FilterConfig, apply_filters};

    pub use crate::export::{ExportRow, project_for_export, to_csv, write_csv};

    pub use crate::config::DecodeConfig;
    pub use crate::source::{DecodedText, decode_bytes, read_transcript};
}
