//! Export projection: records to tabular rows.
//!
//! This is the only place derived numeric data (the word count) exists,
//! and it is recomputed on every projection, never cached on the record.
//! Serialization targets are deliberately thin: a semicolon-delimited
//! CSV writer, either to a file or to an in-memory string.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// One exported table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Formatted calendar date (`%Y-%m-%d`), or the raw matched header
    /// text when the timestamp never resolved.
    pub date: String,

    /// Formatted time of day (`%H:%M:%S`); empty for unresolved records.
    pub time: String,

    /// Sender display name.
    pub sender: String,

    /// Message body with continuation newlines preserved.
    pub body: String,

    /// Whitespace-delimited token count of the body.
    pub word_count: usize,
}

/// Projects final records into export rows.
///
/// One row per record, in order. Word counts are computed here, fresh on
/// every call, so re-running the projection on an unchanged record set
/// yields identical rows.
pub fn project_for_export(records: &[Message]) -> Vec<ExportRow> {
    records
        .iter()
        .map(|record| {
            let (date, time) = match record.timestamp {
                Some(ts) => (
                    ts.format("%Y-%m-%d").to_string(),
                    ts.format("%H:%M:%S").to_string(),
                ),
                // Unresolved: keep the raw text visible for diagnostics
                None => (record.raw_datetime.clone(), String::new()),
            };
            ExportRow {
                date,
                time,
                sender: record.sender.clone(),
                body: record.body.clone(),
                word_count: record.word_count(),
            }
        })
        .collect()
}

const CSV_HEADER: [&str; 5] = ["Date", "Time", "Sender", "Message", "WordCount"];

fn write_rows<W: io::Write>(rows: &[ExportRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.date.as_str(),
            row.time.as_str(),
            row.sender.as_str(),
            row.body.as_str(),
            row.word_count.to_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes rows to a semicolon-delimited CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Message`, `WordCount`
/// - Encoding: UTF-8
pub fn write_csv(rows: &[ExportRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file)
}

/// Renders rows as a semicolon-delimited CSV string.
pub fn to_csv(rows: &[ExportRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
