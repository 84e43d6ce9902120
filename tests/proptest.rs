//! Property-based tests for chatsieve.
//!
//! These tests generate random transcripts to find edge cases.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use chatsieve::prelude::*;

/// A generated transcript message: header components plus continuations.
#[derive(Debug, Clone)]
struct GenMessage {
    day: u32,
    month: u32,
    hour: u32,
    minute: u32,
    pm: bool,
    sender: String,
    first: String,
    continuations: Vec<String>,
}

impl GenMessage {
    fn header_line(&self) -> String {
        format!(
            "{:02}/{:02}/23, {}:{:02} {} - {}: {}",
            self.day,
            self.month,
            self.hour,
            self.minute,
            if self.pm { "pm" } else { "am" },
            self.sender,
            self.first
        )
    }

    fn expected_body(&self) -> String {
        let mut body = self.first.clone();
        for cont in &self.continuations {
            body.push('\n');
            body.push_str(cont);
        }
        body
    }
}

fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "Иван".to_string(),
        "+1 555 010 9999".to_string(),
        "User123".to_string(),
    ])
}

/// Continuation lines safe from accidental header matches.
fn arb_text_line() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "hello world".to_string(),
        "see you tomorrow".to_string(),
        "ok".to_string(),
        "Привет мир".to_string(),
        "🎉🔥 emoji line".to_string(),
        "line with trailing words here".to_string(),
    ])
}

fn arb_gen_message() -> impl Strategy<Value = GenMessage> {
    (
        1u32..=28,
        1u32..=12,
        1u32..=12,
        0u32..=59,
        any::<bool>(),
        arb_sender(),
        arb_text_line(),
        prop::collection::vec(arb_text_line(), 0..4),
    )
        .prop_map(
            |(day, month, hour, minute, pm, sender, first, continuations)| GenMessage {
                day,
                month,
                hour,
                minute,
                pm,
                sender,
                first,
                continuations,
            },
        )
}

fn arb_transcript() -> impl Strategy<Value = Vec<GenMessage>> {
    prop::collection::vec(arb_gen_message(), 1..15)
}

fn render(transcript: &[GenMessage]) -> String {
    let mut lines = Vec::new();
    for msg in transcript {
        lines.push(msg.header_line());
        lines.extend(msg.continuations.iter().cloned());
    }
    lines.join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // ASSEMBLER PROPERTIES
    // ============================================

    /// Record count equals the number of header matches, never the
    /// number of input lines.
    #[test]
    fn record_count_equals_header_count(transcript in arb_transcript()) {
        let text = render(&transcript);
        let outcome = parse_transcript(&text, &default_candidates());
        prop_assert_eq!(outcome.len(), transcript.len());
        prop_assert_eq!(outcome.dropped_leading, 0);
    }

    /// Continuations reattach in original order with one `\n` each.
    #[test]
    fn bodies_reassemble_in_order(transcript in arb_transcript()) {
        let text = render(&transcript);
        let outcome = parse_transcript(&text, &default_candidates());
        for (expected, actual) in transcript.iter().zip(&outcome.messages) {
            prop_assert_eq!(expected.expected_body(), actual.body());
            prop_assert_eq!(expected.sender.as_str(), actual.sender());
        }
    }

    /// Every generated header resolves under the day-first policy.
    #[test]
    fn generated_headers_resolve(msg in arb_gen_message()) {
        let text = msg.header_line();
        let outcome = parse_transcript(&text, &default_candidates());
        prop_assert_eq!(outcome.len(), 1);

        let (messages, unresolved) = resolve_timestamps(outcome.messages);
        prop_assert_eq!(unresolved, 0);

        let ts = messages[0].timestamp().unwrap();
        let date = ts.date_naive();
        prop_assert_eq!(date, NaiveDate::from_ymd_opt(2023, msg.month, msg.day).unwrap());
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Every record in date-filtered output lies within the inclusive bounds.
    #[test]
    fn filtered_dates_within_bounds(
        offsets in prop::collection::vec(0i64..365, 1..20),
        bound_a in 0i64..365,
        bound_b in 0i64..365,
    ) {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let messages: Vec<Message> = offsets
            .iter()
            .map(|&off| {
                let date = base + Duration::days(off);
                Message::new("Alice", "hi")
                    .with_timestamp(date.and_hms_opt(12, 0, 0).unwrap().and_utc())
            })
            .collect();

        let (from, to) = if bound_a <= bound_b { (bound_a, bound_b) } else { (bound_b, bound_a) };
        let from = base + Duration::days(from);
        let to = base + Duration::days(to);

        let config = FilterConfig::new().with_from(from).with_to(to);
        let filtered = apply_filters(messages.clone(), &config);

        for msg in &filtered {
            let date = msg.timestamp().unwrap().date_naive();
            prop_assert!(from <= date && date <= to);
        }

        // Nothing inside the bounds was lost
        let expected = messages
            .iter()
            .filter(|m| {
                let d = m.timestamp().unwrap().date_naive();
                from <= d && d <= to
            })
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// An inactive filter is the identity.
    #[test]
    fn inactive_filter_is_identity(transcript in arb_transcript()) {
        let text = render(&transcript);
        let outcome = parse_transcript(&text, &default_candidates());
        let before = outcome.messages.clone();
        let after = apply_filters(outcome.messages, &FilterConfig::new());
        prop_assert_eq!(before, after);
    }

    // ============================================
    // PROJECTION PROPERTIES
    // ============================================

    /// Projection is idempotent and word counts match the body tokens.
    #[test]
    fn projection_idempotent(transcript in arb_transcript()) {
        let text = render(&transcript);
        let outcome = parse_transcript(&text, &default_candidates());
        let (messages, _) = resolve_timestamps(outcome.messages);

        let first = project_for_export(&messages);
        let second = project_for_export(&messages);
        prop_assert_eq!(&first, &second);

        for (row, msg) in first.iter().zip(&messages) {
            prop_assert_eq!(row.word_count, msg.body().split_whitespace().count());
        }
    }
}
