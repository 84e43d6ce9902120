//! Header candidate table and matcher.
//!
//! Real transcripts vary by locale and export version in date order,
//! separator, and clock convention. Rather than one permissive "smart"
//! expression, the known header spellings are encoded as an ordered table
//! of explicit candidates: each line is tried against the table in
//! declaration order and the first structural match wins. That makes
//! ambiguous lines resolve deterministically and keeps the table easy to
//! extend and audit.

use regex::Regex;

/// One accepted header spelling.
///
/// Capture layout (named groups): `date`, `time`, optional `mer`
/// (meridiem marker), `sender`, `msg`. The sender capture is non-greedy
/// up to the **first** `": "`, so it can never swallow the delimiter.
#[derive(Debug)]
pub struct HeaderCandidate {
    id: &'static str,
    regex: Regex,
}

impl HeaderCandidate {
    fn new(id: &'static str, pattern: &str) -> Self {
        Self {
            id,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Stable identifier of this candidate pattern.
    pub fn id(&self) -> &'static str {
        self.id
    }
}

/// The default candidate table, in priority order.
///
/// Jointly covers two- and four-digit years, slash- and hyphen-separated
/// dates, and 12-hour (case-insensitive AM/PM, optionally space-separated)
/// or 24-hour (optional seconds) times. Ordering is part of the contract:
/// 12-hour candidates precede their 24-hour siblings so a meridiem marker,
/// when present, is always consumed by the match.
pub fn default_candidates() -> Vec<HeaderCandidate> {
    vec![
        HeaderCandidate::new(
            "slash-12h",
            r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}), (?P<time>\d{1,2}:\d{2}) ?(?P<mer>[AaPp][Mm]) - (?P<sender>.+?): (?P<msg>.*)$",
        ),
        HeaderCandidate::new(
            "slash-24h",
            r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}), (?P<time>\d{1,2}:\d{2}(?::\d{2})?) - (?P<sender>.+?): (?P<msg>.*)$",
        ),
        HeaderCandidate::new(
            "hyphen-12h",
            r"^(?P<date>\d{1,2}-\d{1,2}-\d{2,4}), (?P<time>\d{1,2}:\d{2}) ?(?P<mer>[AaPp][Mm]) - (?P<sender>.+?): (?P<msg>.*)$",
        ),
        HeaderCandidate::new(
            "hyphen-24h",
            r"^(?P<date>\d{1,2}-\d{1,2}-\d{2,4}), (?P<time>\d{1,2}:\d{2}(?::\d{2})?) - (?P<sender>.+?): (?P<msg>.*)$",
        ),
    ]
}

/// A successful header match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    /// Date/time text in the canonical `"<date>, <time>[ <MER>]"` layout
    /// expected by the timestamp resolver. The meridiem marker, when
    /// captured, is uppercased.
    pub datetime: String,

    /// Sender name, whitespace-trimmed.
    pub sender: String,

    /// First line of the message body.
    pub message_start: String,

    /// Identifier of the candidate that matched.
    pub candidate: &'static str,
}

/// Tries the candidate table against a normalized line.
///
/// Candidates are evaluated in declaration order; the first match is
/// returned. `None` means the line is a continuation (or leading noise).
pub fn match_header(line: &str, candidates: &[HeaderCandidate]) -> Option<HeaderFields> {
    for candidate in candidates {
        if let Some(caps) = candidate.regex.captures(line) {
            let date = caps.name("date").map_or("", |m| m.as_str());
            let time = caps.name("time").map_or("", |m| m.as_str());
            let datetime = match caps.name("mer") {
                Some(mer) => format!("{date}, {time} {}", mer.as_str().to_ascii_uppercase()),
                None => format!("{date}, {time}"),
            };
            return Some(HeaderFields {
                datetime,
                sender: caps.name("sender").map_or("", |m| m.as_str().trim()).to_owned(),
                message_start: caps.name("msg").map_or("", |m| m.as_str()).to_owned(),
                candidate: candidate.id,
            });
        }
    }
    None
}
