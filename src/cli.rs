//! Command-line interface definition using clap.

use clap::Parser;

/// Extract structured, filterable message tables from WhatsApp-style
/// chat transcript exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsieve")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsieve chat.txt
    chatsieve chat.txt -o messages.csv
    chatsieve chat.txt --after 2023-01-01 --before 2023-12-31
    chatsieve chat.txt --from Alice")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path to the output CSV file
    #[arg(short, long, default_value = "transcript.csv")]
    pub output: String,

    /// Keep only messages on or after this date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only messages from this sender (case-insensitive, exact)
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// Do not count or report byte-decoding anomalies
    #[arg(long)]
    pub quiet_decode: bool,
}
