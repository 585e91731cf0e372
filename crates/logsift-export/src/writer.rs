//! CSV serialization of access records.

use std::path::Path;

use logsift_common::constants::CSV_COLUMNS;
use logsift_common::error::{LogsiftError, Result};
use logsift_parse::record::AccessRecord;

/// Writes records to a CSV file, header included, creating parent
/// directories as needed.
///
/// The header is always written, even for an empty record set.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created, or if
/// serialization fails.
pub fn write_csv(path: &Path, records: &[AccessRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LogsiftError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        // RFC 4180 line endings.
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| LogsiftError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
