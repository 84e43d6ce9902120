//! Input boundary: permissive decoding of transcript bytes.
//!
//! The parsing core works on decoded text only. This module is the thin
//! boundary that turns uploaded bytes into that text: invalid UTF-8
//! sequences are replaced rather than raised, keeping parsing
//! best-effort. Archive unpacking (picking the `.txt` member out of an
//! export ZIP) is an external collaborator and happens before this crate
//! is involved.

use std::fs;
use std::path::Path;

use crate::config::DecodeConfig;
use crate::error::{ChatsieveError, Result};

/// Decoded transcript text plus decoding diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// The decoded text, with invalid sequences replaced by U+FFFD.
    pub text: String,

    /// Number of replacement characters introduced while decoding.
    ///
    /// Always 0 when [`DecodeConfig::report_anomalies`] is off.
    pub anomalies: usize,
}

/// Decodes raw bytes permissively.
///
/// Invalid byte sequences become U+FFFD replacement characters; decoding
/// itself never fails. When `config.report_anomalies` is set, the number
/// of replacement characters in the result is counted so callers can
/// surface it in aggregate.
pub fn decode_bytes(bytes: &[u8], config: &DecodeConfig) -> DecodedText {
    let text = String::from_utf8_lossy(bytes).into_owned();
    let anomalies = if config.report_anomalies {
        text.matches('\u{FFFD}').count()
    } else {
        0
    };
    DecodedText { text, anomalies }
}

/// Reads a transcript file and decodes it permissively.
///
/// # Errors
///
/// Returns [`ChatsieveError::Io`] if the file cannot be read, and
/// [`ChatsieveError::NoTextSource`] if the decoded content is empty or
/// whitespace-only.
pub fn read_transcript(path: &Path, config: &DecodeConfig) -> Result<DecodedText> {
    let bytes = fs::read(path)?;
    let decoded = decode_bytes(&bytes, config);
    if decoded.text.trim().is_empty() {
        return Err(ChatsieveError::no_text_source(path));
    }
    Ok(decoded)
}
