//! Domain primitive types used across the logsift workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogsiftError;

/// Column a CSV export can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Normalized UTC timestamp of the request.
    #[default]
    TimeUtc,
    /// HTTP response status.
    Status,
    /// Total request processing time.
    RequestTime,
    /// Bytes sent in the response body.
    BodyBytesSent,
    /// Time spent waiting on the upstream.
    UpstreamResponseTime,
}

impl SortKey {
    /// All sortable columns, in the order they are documented.
    pub const ALL: [Self; 5] = [
        Self::TimeUtc,
        Self::Status,
        Self::RequestTime,
        Self::BodyBytesSent,
        Self::UpstreamResponseTime,
    ];

    /// Column name as it appears in the CSV header.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeUtc => "time_utc",
            Self::Status => "status",
            Self::RequestTime => "request_time",
            Self::BodyBytesSent => "body_bytes_sent",
            Self::UpstreamResponseTime => "upstream_response_time",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = LogsiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LogsiftError::Config {
                message: format!("unknown sort key \"{s}\" (expected one of: time_utc, status, request_time, body_bytes_sent, upstream_response_time)"),
            })
    }
}
