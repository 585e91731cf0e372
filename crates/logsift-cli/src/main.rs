//! # lsift — logsift CLI
//!
//! Single-purpose container entrypoint: parse an nginx ingress access log
//! and export it to CSV. The process exit code is the contract with the
//! container host — 0 on success, 2 for a missing input file, 3 for a
//! strict-mode format violation, 1 for anything else.

mod cli;

use clap::Parser;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();
    match cli::run(&args) {
        Ok(summary) => println!("{summary}"),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
