//! Line-by-line message assembly.
//!
//! Multi-line messages are visually indistinguishable from malformed
//! headers, so the only disambiguator is "did this line match a header
//! pattern". The assembler is therefore a two-state machine with no
//! lookahead and no backtracking: once a line is consumed as a
//! continuation it stays a continuation.
//!
//! States and transitions:
//!
//! - `NoRecord` + header match → open a record, enter `InRecord`
//! - `NoRecord` + no match → drop the line (counted), stay `NoRecord`
//! - `InRecord` + header match → finalize current record, open a new one
//! - `InRecord` + no match → append line to the current body with `\n`
//! - end of input while `InRecord` → finalize the current record

use crate::message::Message;
use crate::parsing::header::{HeaderCandidate, match_header};
use crate::parsing::normalize::normalize_line;
use crate::parsing::ParseOutcome;

/// Incremental transcript assembler.
///
/// Owns the in-progress record list for one parse pass; ownership of the
/// finished, ordered records transfers to the caller via
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct Assembler<'c> {
    candidates: &'c [HeaderCandidate],
    messages: Vec<Message>,
    current: Option<Message>,
    dropped_leading: usize,
}

impl<'c> Assembler<'c> {
    /// Creates an assembler over the given candidate table.
    pub fn new(candidates: &'c [HeaderCandidate]) -> Self {
        Self {
            candidates,
            messages: Vec::new(),
            current: None,
            dropped_leading: 0,
        }
    }

    /// Feeds one raw physical line through normalize → match → assemble.
    pub fn feed_line(&mut self, raw_line: &str) {
        let line = normalize_line(raw_line);

        match match_header(&line, self.candidates) {
            Some(fields) => {
                if let Some(done) = self.current.take() {
                    self.messages.push(done);
                }
                self.current = Some(
                    Message::new(fields.sender, fields.message_start)
                        .with_raw_datetime(fields.datetime),
                );
            }
            None => match self.current.as_mut() {
                Some(record) => record.push_continuation(&line),
                // No record open yet: leading noise, dropped but counted.
                None => self.dropped_leading += 1,
            },
        }
    }

    /// Finalizes the pass, closing any record still open.
    pub fn finish(mut self) -> ParseOutcome {
        if let Some(done) = self.current.take() {
            self.messages.push(done);
        }
        ParseOutcome {
            messages: self.messages,
            dropped_leading: self.dropped_leading,
        }
    }
}
