//! # chatsieve CLI
//!
//! Command-line driver for the chatsieve library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser;

use chatsieve::ChatsieveError;
use chatsieve::cli::Args;
use chatsieve::config::DecodeConfig;
use chatsieve::export::{project_for_export, write_csv};
use chatsieve::filter::{FilterConfig, apply_filters};
use chatsieve::parsing::{default_candidates, parse_transcript, resolve_timestamps};
use chatsieve::source::read_transcript;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsieveError> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("📱 chatsieve v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {}", from);
    }

    println!();

    // Step 1: Read and decode
    let decode_config = DecodeConfig::new().with_report_anomalies(!args.quiet_decode);
    let decoded = read_transcript(Path::new(&args.input), &decode_config)?;
    if decoded.anomalies > 0 {
        println!(
            "⚠️  {} byte sequence(s) could not be decoded cleanly and were replaced",
            decoded.anomalies
        );
    }

    // Step 2: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let candidates = default_candidates();
    let outcome = parse_transcript(&decoded.text, &candidates);
    println!(
        "   Found {} messages ({:.2}s)",
        outcome.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if outcome.dropped_leading > 0 {
        println!(
            "   Dropped {} line(s) before the first header match",
            outcome.dropped_leading
        );
    }

    if outcome.is_empty() {
        println!();
        println!("⚠️  No messages could be parsed. Check the transcript format.");
        return Ok(());
    }

    // Step 3: Resolve timestamps
    let (messages, unresolved) = resolve_timestamps(outcome.messages);
    if unresolved > 0 {
        println!("   {} message(s) with unresolvable timestamps", unresolved);
    }

    // Step 4: Filter
    let original_count = messages.len();
    let filtered = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    // Step 5: Project and write
    println!("💾 Writing CSV...");
    let rows = project_for_export(&filtered);
    write_csv(&rows, Path::new(&args.output))?;

    println!();
    println!("✅ Done! Output saved to {}", args.output);
    println!();
    println!("📊 Summary:");
    println!("   Parsed:     {} messages", original_count);
    if filter_config.is_active() {
        println!("   Filtered:   {} messages", filtered.len());
    }
    if unresolved > 0 {
        println!("   Unresolved: {} timestamps", unresolved);
    }
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
