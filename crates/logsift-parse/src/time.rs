//! Timestamp parsing and normalization.
//!
//! Access logs carry a bracketed local timestamp with a UTC offset; the CSV
//! export carries the same instant normalized to UTC, rendered as RFC 3339
//! with seconds precision and a `Z` suffix.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use logsift_common::constants::TIME_LOCAL_FORMAT;
use logsift_common::error::{LogsiftError, Result};

/// Parses the bracketed `time_local` field, e.g. `26/Apr/2021:21:20:17 +0000`.
///
/// # Errors
///
/// Returns an error if the value does not match [`TIME_LOCAL_FORMAT`].
pub fn parse_time_local(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(value, TIME_LOCAL_FORMAT)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| LogsiftError::Timestamp {
            value: value.to_owned(),
            source,
        })
}

/// Parses a user-supplied window bound such as `2021-04-26T21:20:00Z`.
///
/// Accepts RFC 3339 with a `Z` suffix or a numeric offset; a timestamp with
/// no offset at all is interpreted as UTC. A space may stand in for the `T`
/// separator.
///
/// # Errors
///
/// Returns an error if the value matches none of the accepted shapes.
pub fn parse_user_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(t.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|source| LogsiftError::Timestamp {
            value: value.to_owned(),
            source,
        })
}

/// Renders a UTC instant as RFC 3339 with seconds precision and `Z`.
#[must_use]
pub fn format_utc(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
