//! Row filtering.
//!
//! All configured criteria must hold for a record to pass; an absent
//! criterion matches everything.

use chrono::{DateTime, Utc};
use logsift_parse::record::AccessRecord;

/// Conjunctive row filter built from the CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    /// Keep only these response statuses.
    pub statuses: Option<Vec<u16>>,
    /// Keep only these HTTP methods (exact match).
    pub methods: Option<Vec<String>>,
    /// Keep only rows whose path contains this substring.
    pub path_contains: Option<String>,
    /// Keep only these client addresses.
    pub client_ips: Option<Vec<String>>,
    /// Keep only rows at or after this instant.
    pub since: Option<DateTime<Utc>>,
    /// Keep only rows at or before this instant.
    pub until: Option<DateTime<Utc>>,
}

impl RowFilter {
    /// Whether the record passes every configured criterion.
    #[must_use]
    pub fn matches(&self, record: &AccessRecord) -> bool {
        if let Some(statuses) = &self.statuses {
            if !statuses.contains(&record.status) {
                return false;
            }
        }
        if let Some(methods) = &self.methods {
            if !methods.contains(&record.method) {
                return false;
            }
        }
        if let Some(needle) = &self.path_contains {
            if !record.path.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(ips) = &self.client_ips {
            if !ips.contains(&record.remote_addr) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if record.time_utc < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if record.time_utc > until {
                return false;
            }
        }
        true
    }
}
