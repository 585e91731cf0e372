//! Stable record ordering.
//!
//! Absent numeric values take the sentinel `-1`, placing them below any
//! real measurement. Descending order reverses the comparator only, so
//! rows with equal keys keep their input order either way.

use std::cmp::Ordering;

use logsift_common::types::SortKey;
use logsift_parse::record::AccessRecord;

/// Sorts records in place by the given column.
pub fn sort_records(records: &mut [AccessRecord], key: SortKey, descending: bool) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if descending { ord.reverse() } else { ord }
    });
}

fn compare(a: &AccessRecord, b: &AccessRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::TimeUtc => a.time_utc.cmp(&b.time_utc),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::RequestTime => cmp_opt_float(a.request_time, b.request_time),
        SortKey::BodyBytesSent => cmp_opt_int(a.body_bytes_sent, b.body_bytes_sent),
        SortKey::UpstreamResponseTime => {
            cmp_opt_float(a.upstream_response_time, b.upstream_response_time)
        }
    }
}

fn cmp_opt_int(a: Option<i64>, b: Option<i64>) -> Ordering {
    a.unwrap_or(-1).cmp(&b.unwrap_or(-1))
}

fn cmp_opt_float(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(-1.0).total_cmp(&b.unwrap_or(-1.0))
}
