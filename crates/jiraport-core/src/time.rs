// Rust guideline compliant 2026-10-15

//! Timestamp helpers for Jira exports.
//!
//! Jira writes timestamps in RFC 2822 form, e.g. `Mon, 2 Jan 2006 15:04:05 -0700`.

use chrono::{DateTime, Duration, FixedOffset};

/// Parses a Jira timestamp shifted by a number of days.
///
/// # Arguments
///
/// * `raw` - Timestamp as written in the export
/// * `days` - Whole days to add (negative to subtract)
/// * `now` - Instant substituted when `raw` cannot be parsed
///
/// # Returns
///
/// The parsed time plus `days`, or `now` plus `days` when parsing fails. The
/// original offset is preserved.
pub fn parse_timestamp_with_delta(
    raw: &str,
    days: i64,
    now: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    let base = match DateTime::parse_from_rfc2822(raw.trim()) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(value = %raw, error = %err, "unparseable timestamp, using current time");
            now
        }
    };
    base + Duration::days(days)
}

/// Parses a Jira timestamp, falling back to `now`.
pub fn parse_timestamp(raw: &str, now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    parse_timestamp_with_delta(raw, 0, now)
}
