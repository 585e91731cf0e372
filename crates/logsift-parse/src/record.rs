//! Typed access-log records.
//!
//! Converts the raw textual fields of a scanned line into a typed
//! [`AccessRecord`], applying time normalization, request decomposition,
//! and lenient numeric parsing.

use chrono::{DateTime, Utc};
use logsift_common::error::Result;
use serde::{Serialize, Serializer};

use crate::line::{self, RawLine};
use crate::request;
use crate::time;

/// Upstream status column: numeric when the field is purely digits,
/// otherwise the raw text.
///
/// A missing upstream status is logged as `-` and is exported as `-`,
/// unlike the other numeric columns whose missing values blank out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamStatus {
    /// Numeric status code.
    Code(i64),
    /// Non-numeric field text, e.g. `-`.
    Raw(String),
}

impl UpstreamStatus {
    fn from_field(value: &str) -> Self {
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(code) = value.parse::<i64>() {
                return Self::Code(code);
            }
        }
        Self::Raw(value.to_owned())
    }
}

impl Serialize for UpstreamStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Code(code) => serializer.serialize_i64(*code),
            Self::Raw(text) => serializer.serialize_str(text),
        }
    }
}

/// One parsed access-log line.
///
/// Field order matches the CSV column order exactly
/// (see `logsift_common::constants::CSV_COLUMNS`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessRecord {
    /// Client address.
    pub remote_addr: String,
    /// Local timestamp exactly as logged.
    pub time_local: String,
    /// The same instant normalized to UTC.
    #[serde(serialize_with = "serialize_time_utc")]
    pub time_utc: DateTime<Utc>,
    /// HTTP method.
    pub method: String,
    /// Request target exactly as logged.
    pub uri: String,
    /// Path portion of the target.
    pub path: String,
    /// Protocol version.
    pub proto: String,
    /// Response status code.
    pub status: u16,
    /// Response body size in bytes.
    pub body_bytes_sent: Option<i64>,
    /// Referer header value.
    pub http_referer: String,
    /// User-agent header value.
    pub http_user_agent: String,
    /// Request size in bytes.
    pub request_length: Option<i64>,
    /// Request processing time in seconds.
    pub request_time: Option<f64>,
    /// Upstream service name.
    pub upstream_name: String,
    /// Alternative upstream service name.
    pub upstream_alternative: String,
    /// Upstream address.
    pub upstream_addr: String,
    /// Upstream response size in bytes.
    pub upstream_response_length: Option<i64>,
    /// Upstream response time in seconds.
    pub upstream_response_time: Option<f64>,
    /// Upstream status code, or its raw text when non-numeric.
    pub upstream_status: UpstreamStatus,
    /// Request identifier assigned by the ingress.
    pub request_id: String,
    /// Number of distinct query keys carrying a non-blank value.
    pub query_keys_count: usize,
}

impl AccessRecord {
    /// Parses one log line into a record.
    ///
    /// Returns `None` for any malformed line, including one whose timestamp
    /// cannot be parsed.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let raw = line::scan_line(input)?;
        Self::from_raw(&raw).ok()
    }

    /// Builds a record from already-scanned raw fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the `time_local` field cannot be parsed.
    pub fn from_raw(raw: &RawLine<'_>) -> Result<Self> {
        let time_utc = time::parse_time_local(raw.time_local)?;
        let parts = request::split_request(raw.request);
        let query_keys_count = request::count_query_keys(&parts.query);

        Ok(Self {
            remote_addr: raw.remote_addr.to_owned(),
            time_local: raw.time_local.to_owned(),
            time_utc,
            method: parts.method,
            uri: parts.uri,
            path: parts.path,
            proto: parts.proto,
            // The scanner guarantees exactly three ASCII digits.
            status: raw.status.parse().unwrap_or(0),
            body_bytes_sent: opt_int(raw.body_bytes_sent),
            http_referer: raw.http_referer.to_owned(),
            http_user_agent: raw.http_user_agent.to_owned(),
            request_length: opt_int(raw.request_length),
            request_time: opt_float(raw.request_time),
            upstream_name: raw.upstream_name.to_owned(),
            upstream_alternative: raw.upstream_alternative.to_owned(),
            upstream_addr: raw.upstream_addr.to_owned(),
            upstream_response_length: opt_int(raw.upstream_response_length),
            upstream_response_time: opt_float(raw.upstream_response_time),
            upstream_status: UpstreamStatus::from_field(raw.upstream_status),
            request_id: raw.request_id.to_owned(),
            query_keys_count,
        })
    }
}

fn serialize_time_utc<S>(
    value: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time::format_utc(*value))
}

/// Lenient integer field: `-`, empty, or non-numeric input is absent.
fn opt_int(value: &str) -> Option<i64> {
    if value == "-" || value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Lenient float field: `-`, empty, or non-numeric input is absent.
fn opt_float(value: &str) -> Option<f64> {
    if value == "-" || value.is_empty() {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "192.168.1.10 - admin [26/Apr/2021:21:20:17 +0000] \
\"GET /api/v1/items?id=3&page=2 HTTP/2.0\" 200 1234 \"https://example.com/\" \
\"Mozilla/5.0 (X11; Linux x86_64)\" 512 0.004 [default-backend-80] [] \
10.0.0.5:8080 1234 0.003 200 abc123def456";

    #[test]
    fn parse_full_record() {
        let rec = AccessRecord::parse(SAMPLE).expect("should parse");
        assert_eq!(rec.remote_addr, "192.168.1.10");
        assert_eq!(rec.time_local, "26/Apr/2021:21:20:17 +0000");
        assert_eq!(time::format_utc(rec.time_utc), "2021-04-26T21:20:17Z");
        assert_eq!(rec.method, "GET");
        assert_eq!(rec.uri, "/api/v1/items?id=3&page=2");
        assert_eq!(rec.path, "/api/v1/items");
        assert_eq!(rec.proto, "HTTP/2.0");
        assert_eq!(rec.status, 200);
        assert_eq!(rec.body_bytes_sent, Some(1234));
        assert_eq!(rec.request_length, Some(512));
        assert_eq!(rec.request_time, Some(0.004));
        assert_eq!(rec.upstream_name, "default-backend-80");
        assert_eq!(rec.upstream_alternative, "");
        assert_eq!(rec.upstream_response_length, Some(1234));
        assert_eq!(rec.upstream_response_time, Some(0.003));
        assert_eq!(rec.upstream_status, UpstreamStatus::Code(200));
        assert_eq!(rec.request_id, "abc123def456");
        assert_eq!(rec.query_keys_count, 2);
    }

    #[test]
    fn parse_missing_values_are_absent() {
        let line = "10.0.0.1 - - [26/Apr/2021:21:20:17 +0000] \"GET / HTTP/1.1\" \
499 - \"\" \"\" - - [] [] - - - - deadbeef";
        let rec = AccessRecord::parse(line).expect("should parse");
        assert_eq!(rec.status, 499);
        assert_eq!(rec.body_bytes_sent, None);
        assert_eq!(rec.request_length, None);
        assert_eq!(rec.request_time, None);
        assert_eq!(rec.upstream_response_length, None);
        assert_eq!(rec.upstream_response_time, None);
        assert_eq!(rec.upstream_status, UpstreamStatus::Raw("-".into()));
        assert_eq!(rec.query_keys_count, 0);
    }

    #[test]
    fn parse_rejects_bad_timestamp() {
        let line = SAMPLE.replacen("26/Apr/2021", "26/Foo/2021", 1);
        assert!(AccessRecord::parse(&line).is_none());
    }

    #[test]
    fn parse_rejects_non_matching_line() {
        assert!(AccessRecord::parse("garbage").is_none());
    }

    #[test]
    fn upstream_status_keeps_non_numeric_text() {
        assert_eq!(
            UpstreamStatus::from_field("30x"),
            UpstreamStatus::Raw("30x".into())
        );
        assert_eq!(UpstreamStatus::from_field("502"), UpstreamStatus::Code(502));
    }

    #[test]
    fn opt_int_lenient() {
        assert_eq!(opt_int("42"), Some(42));
        assert_eq!(opt_int("-42"), Some(-42));
        assert_eq!(opt_int("-"), None);
        assert_eq!(opt_int(""), None);
        assert_eq!(opt_int("4.2"), None);
        assert_eq!(opt_int("abc"), None);
    }

    #[test]
    fn opt_float_lenient() {
        assert_eq!(opt_float("0.25"), Some(0.25));
        assert_eq!(opt_float("-1.5"), Some(-1.5));
        assert_eq!(opt_float("3"), Some(3.0));
        assert_eq!(opt_float("-"), None);
        assert_eq!(opt_float(""), None);
        assert_eq!(opt_float("fast"), None);
    }
}
