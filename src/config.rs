//! Configuration types for input decoding.
//!
//! Transcript exports arrive as raw bytes of uncertain provenance, so
//! decoding is permissive: invalid byte sequences are replaced, never
//! fatal. Whether those replacements are counted and surfaced as a
//! diagnostic is a policy choice, so it is configurable here rather than
//! hard-coded.
//!
//! # Example
//!
//! ```rust
//! use chatsieve::config::DecodeConfig;
//!
//! let config = DecodeConfig::new().with_report_anomalies(false);
//! assert!(!config.report_anomalies);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for permissive byte-to-text decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Count replacement characters produced during decoding and report
    /// the total as a diagnostic (default: true).
    ///
    /// Replacement never fails either way; this only controls whether the
    /// anomaly count is tracked.
    pub report_anomalies: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            report_anomalies: true,
        }
    }
}

impl DecodeConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether decoding anomalies are counted and reported.
    #[must_use]
    pub fn with_report_anomalies(mut self, report: bool) -> Self {
        self.report_anomalies = report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_config_default() {
        let config = DecodeConfig::default();
        assert!(config.report_anomalies);
    }

    #[test]
    fn test_decode_config_builder() {
        let config = DecodeConfig::new().with_report_anomalies(false);
        assert!(!config.report_anomalies);
    }
}
