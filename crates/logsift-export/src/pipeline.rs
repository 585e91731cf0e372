//! File-to-file export pipeline: read, parse, filter, sort, limit, write.

use std::path::Path;

use logsift_common::error::Result;
use logsift_common::types::SortKey;
use logsift_parse::reader;

use crate::filter::RowFilter;
use crate::{sort, writer};

/// Everything that shapes one export run besides the input/output paths.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Row filter applied before sorting.
    pub filter: RowFilter,
    /// Column to order the output by.
    pub sort_by: SortKey,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// Keep only the first N rows after filtering and sorting.
    pub limit: Option<usize>,
    /// Fail on the first malformed line instead of counting it.
    pub strict: bool,
}

/// Counters reported after a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    /// Rows written to the CSV, after filtering and limiting.
    pub rows_written: usize,
    /// Input lines that did not match the format.
    pub bad_lines: usize,
}

/// Runs the full export pipeline.
///
/// # Errors
///
/// Propagates input, parsing (strict mode), and output errors unchanged.
pub fn export_file(input: &Path, output: &Path, options: &ExportOptions) -> Result<ExportReport> {
    tracing::info!(input = %input.display(), "parsing access log");
    let outcome = reader::read_log_file(input, options.strict)?;

    let mut records: Vec<_> = outcome
        .records
        .into_iter()
        .filter(|record| options.filter.matches(record))
        .collect();

    sort::sort_records(&mut records, options.sort_by, options.descending);
    if let Some(limit) = options.limit {
        records.truncate(limit);
    }

    writer::write_csv(output, &records)?;
    tracing::info!(
        rows = records.len(),
        bad_lines = outcome.bad_lines,
        output = %output.display(),
        "export complete"
    );

    Ok(ExportReport {
        rows_written: records.len(),
        bad_lines: outcome.bad_lines,
    })
}
