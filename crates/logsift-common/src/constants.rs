//! System-wide constants.

/// Application name used in logging and documentation.
pub const APP_NAME: &str = "logsift";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "lsift";

/// `strftime` format of the bracketed `time_local` field in an access log,
/// e.g. `26/Apr/2021:21:20:17 +0000`.
pub const TIME_LOCAL_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Columns of the exported CSV, in the exact order they are written.
pub const CSV_COLUMNS: [&str; 21] = [
    "remote_addr",
    "time_local",
    "time_utc",
    "method",
    "uri",
    "path",
    "proto",
    "status",
    "body_bytes_sent",
    "http_referer",
    "http_user_agent",
    "request_length",
    "request_time",
    "upstream_name",
    "upstream_alternative",
    "upstream_addr",
    "upstream_response_length",
    "upstream_response_time",
    "upstream_status",
    "request_id",
    "query_keys_count",
];
