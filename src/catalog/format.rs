//! Release timestamp rendering modes

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Output mode for a resolved release timestamp.
///
/// Only `epoch` is a recognized token; leaving the argument off selects the
/// ISO rendering. Every other token (including an explicit `iso`) falls
/// through to chrono's default `Display`, preserving the original tool's
/// permissive fallback rather than rejecting unknown tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Extended ISO-8601 with an explicit offset suffix, `+00:00` for UTC
    Iso,
    /// Epoch seconds followed by the offset without a colon
    Epoch,
    /// chrono's default stringification of the offset date-time
    Verbose,
}

impl FormatMode {
    pub fn from_arg(token: Option<&str>) -> Self {
        match token {
            None => FormatMode::Iso,
            Some("epoch") => FormatMode::Epoch,
            Some(_) => FormatMode::Verbose,
        }
    }
}

/// Renders a release timestamp in the requested mode.
pub fn format_release_date(release_date: &DateTime<FixedOffset>, mode: FormatMode) -> String {
    match mode {
        FormatMode::Epoch => format!(
            "{} {}",
            release_date.timestamp(),
            release_date.format("%z")
        ),
        FormatMode::Iso => release_date.to_rfc3339_opts(SecondsFormat::Secs, false),
        FormatMode::Verbose => release_date.to_string(),
    }
}
