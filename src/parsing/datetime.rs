//! Timestamp resolution for matched header text.
//!
//! The matcher hands over date/time text in a canonical
//! `"<date>, <time>[ <MER>]"` layout; this module turns it into a single
//! calendar timestamp by trying a fixed, ordered list of format strings
//! until one consumes the whole string exactly.
//!
//! Ambiguous `NN/NN` date pairs are read **day-first**. The observed
//! exports are inconsistent here, so this is a fixed documented policy,
//! not locale inference.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::message::Message;

/// Ordered format strings tried by [`resolve_timestamp`].
///
/// Covers two- and four-digit years, 12-hour-with-meridiem and 24-hour
/// encodings (optional seconds), and slash or hyphen date separators.
/// First exact, fully-consuming parse wins.
pub const DATETIME_FORMATS: &[&str] = &[
    // 12-hour with meridiem
    "%d/%m/%y, %I:%M %p",
    "%d/%m/%Y, %I:%M %p",
    "%d-%m-%y, %I:%M %p",
    "%d-%m-%Y, %I:%M %p",
    // 24-hour
    "%d/%m/%y, %H:%M",
    "%d/%m/%Y, %H:%M",
    "%d/%m/%y, %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
    "%d-%m-%y, %H:%M",
    "%d-%m-%Y, %H:%M",
    "%d-%m-%y, %H:%M:%S",
    "%d-%m-%Y, %H:%M:%S",
];

/// Resolves canonical header text into a timestamp.
///
/// Returns `None` when no format string parses the text exactly;
/// the record is then kept with an invalid-timestamp marker rather than
/// failing the parse pass.
pub fn resolve_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Resolves timestamps for a whole parse result.
///
/// Every record gets its `raw_datetime` run through
/// [`resolve_timestamp`]; records whose text fits no known format keep
/// `timestamp: None` and are counted. Returns the records and the
/// unresolved count.
pub fn resolve_timestamps(mut records: Vec<Message>) -> (Vec<Message>, usize) {
    let mut unresolved = 0;
    for record in &mut records {
        match resolve_timestamp(&record.raw_datetime) {
            Some(ts) => record.timestamp = Some(ts),
            None => unresolved += 1,
        }
    }
    (records, unresolved)
}
