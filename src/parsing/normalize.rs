//! Line normalization applied before header matching.
//!
//! Locale-dependent exports pad the time/meridiem gap with a narrow
//! no-break space (U+202F) or a no-break space (U+00A0). Both are turned
//! into ordinary spaces here so the header patterns only ever see ASCII
//! whitespace; the ends of the line are then trimmed.

/// Normalizes one raw transcript line.
///
/// Replaces narrow no-break space and no-break space characters with
/// ordinary spaces, then trims surrounding whitespace. Interior
/// meaningful whitespace is left untouched. Total: always succeeds,
/// including on empty input.
pub fn normalize_line(line: &str) -> String {
    let replaced: String = line
        .chars()
        .map(|c| match c {
            '\u{202F}' | '\u{00A0}' => ' ',
            other => other,
        })
        .collect();
    replaced.trim().to_owned()
}
