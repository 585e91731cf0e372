//! CLI definition and execution.

use std::path::PathBuf;

use clap::Parser;

use logsift_common::error::Result;
use logsift_common::types::SortKey;
use logsift_export::filter::RowFilter;
use logsift_export::pipeline::{self, ExportOptions};
use logsift_parse::time::parse_user_timestamp;

/// Parse an nginx ingress access log and export it to CSV.
#[derive(Parser, Debug)]
#[command(name = logsift_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Path to the access log file.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Path to the output CSV file.
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Keep only these HTTP statuses, e.g. --status 200 404.
    #[arg(long, num_args = 1..)]
    pub status: Option<Vec<u16>>,

    /// Keep only these methods, e.g. --method GET POST.
    #[arg(long, num_args = 1..)]
    pub method: Option<Vec<String>>,

    /// Keep only rows whose path contains this substring.
    #[arg(long)]
    pub path_contains: Option<String>,

    /// Keep only these client IPs.
    #[arg(long, num_args = 1..)]
    pub ip: Option<Vec<String>>,

    /// Start time (UTC), e.g. 2021-04-26T21:20:00Z.
    #[arg(long)]
    pub since: Option<String>,

    /// End time (UTC), e.g. 2021-04-26T21:30:00Z.
    #[arg(long)]
    pub until: Option<String>,

    /// Column to sort the output by: time_utc, status, request_time,
    /// body_bytes_sent, or upstream_response_time.
    #[arg(long, default_value_t = SortKey::TimeUtc)]
    pub sort_by: SortKey,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,

    /// Write only the first N rows after filtering and sorting.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Fail if any line does not match the expected format.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Builds the export options from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `--since` or `--until` is not a valid timestamp.
    pub fn export_options(&self) -> Result<ExportOptions> {
        let since = self
            .since
            .as_deref()
            .map(parse_user_timestamp)
            .transpose()?;
        let until = self
            .until
            .as_deref()
            .map(parse_user_timestamp)
            .transpose()?;

        Ok(ExportOptions {
            filter: RowFilter {
                statuses: self.status.clone(),
                methods: self.method.clone(),
                path_contains: self.path_contains.clone(),
                client_ips: self.ip.clone(),
                since,
                until,
            },
            sort_by: self.sort_by,
            descending: self.desc,
            limit: self.limit,
            strict: self.strict,
        })
    }
}

/// Runs the export and renders the one-line success summary.
///
/// # Errors
///
/// Propagates configuration, input, parsing, and output errors unchanged;
/// the caller maps them to exit codes.
pub fn run(args: &Cli) -> Result<String> {
    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "starting export"
    );
    let options = args.export_options()?;
    let report = pipeline::export_file(&args.input, &args.output, &options)?;
    Ok(format!(
        "OK: parsed={} rows, skipped_bad_lines={}, output={}",
        report.rows_written,
        report.bad_lines,
        args.output.display()
    ))
}
