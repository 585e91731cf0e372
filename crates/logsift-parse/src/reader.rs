//! Log file reading and line iteration.
//!
//! Lines are numbered from 1, blank lines are skipped, and invalid UTF-8 is
//! replaced rather than rejected. A malformed line is counted in lenient
//! mode and fatal in strict mode.

use std::path::Path;

use logsift_common::error::{LogsiftError, Result};

use crate::record::AccessRecord;

/// Result of parsing a whole log input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Records for every well-formed line, in input order.
    pub records: Vec<AccessRecord>,
    /// Number of lines that did not match the format.
    pub bad_lines: usize,
}

/// Parses log content that is already in memory.
///
/// # Errors
///
/// In strict mode, returns [`LogsiftError::MalformedLine`] for the first
/// line that does not match the format.
pub fn parse_content(content: &str, strict: bool) -> Result<ParseOutcome> {
    let mut records = Vec::new();
    let mut bad_lines = 0usize;

    // Splitting on '\n' only: a '\r' terminator is part of the line and
    // makes it malformed.
    for (idx, raw_line) in content.split('\n').enumerate() {
        let line_no = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        match AccessRecord::parse(raw_line) {
            Some(record) => records.push(record),
            None => {
                bad_lines += 1;
                if strict {
                    return Err(LogsiftError::MalformedLine {
                        line_no,
                        line: raw_line.to_owned(),
                    });
                }
                tracing::debug!(line_no, "skipping malformed line");
            }
        }
    }

    Ok(ParseOutcome { records, bad_lines })
}

/// Reads and parses a log file from disk.
///
/// # Errors
///
/// Returns [`LogsiftError::InputNotFound`] if the file does not exist,
/// [`LogsiftError::Io`] if it cannot be read, and propagates strict-mode
/// failures from [`parse_content`].
pub fn read_log_file(path: &Path, strict: bool) -> Result<ParseOutcome> {
    if !path.exists() {
        return Err(LogsiftError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| LogsiftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_content(&String::from_utf8_lossy(&bytes), strict)
}
