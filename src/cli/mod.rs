//! CLI definitions and entry point.

use crate::config::{
    DEFAULT_API_URL, DEFAULT_DELAY_SECS, DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_SIZE, DEFAULT_QUERY,
    QueryConfig,
};
use crate::error::Result;
use crate::fetch::{self, Pacer, ReqwestTransport, SearchTransport, StopReason, ThreadSleepPacer};
use crate::format::write_issues;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Export GitHub issue search results to CSV
#[derive(Parser, Debug, Clone)]
#[command(name = "git-issues", author, version, about, long_about = None)]
pub struct Cli {
    /// Write git issues to the target file (empty for stdout)
    #[arg(short = 'f', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub file: String,

    /// Repository owner or organization
    #[arg(short = 'o', long)]
    pub owner: String,

    /// Repository name
    #[arg(short = 'r', long)]
    pub repo: String,

    /// Search filter appended to the repo scope, qualifiers joined by '+'
    #[arg(
        short = 'q',
        long,
        default_value = DEFAULT_QUERY,
        long_help = "Search filter appended to the repo scope, qualifiers joined by '+'.\n\n\
            Examples:\n  \
            is:pr+is:merged+state:closed+-label:pr-backport+closed:>=2021-02-01\n  \
            is:issue+is:closed+closed:2021-02-01..2021-04-01"
    )]
    pub query: String,

    /// Results requested per page
    #[arg(short = 'p', long = "page_size", visible_alias = "page-size", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Write to standard output instead of --file
    #[arg(long)]
    pub stdout: bool,

    /// Truncate the output file instead of appending to it
    #[arg(long)]
    pub overwrite: bool,

    /// API base URL (for GitHub Enterprise: https://HOST/api/v3)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait between page requests
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(long)]
    pub quiet: bool,

    /// Also append log events to this file (no colors)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Run one export with the production transport and pacing.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the export fails.
pub fn execute(config: &QueryConfig) -> Result<usize> {
    let transport = ReqwestTransport::new()?;
    run_export(config, &transport, &ThreadSleepPacer)
}

/// Fetch every page and write whatever was collected.
///
/// Partial results from an aborted fetch are still written. Returns the
/// number of rows written.
///
/// # Errors
///
/// Returns an error on fatal fetch errors (nothing is written then) or if
/// the output cannot be written.
pub fn run_export(
    config: &QueryConfig,
    transport: &dyn SearchTransport,
    pacer: &dyn Pacer,
) -> Result<usize> {
    let outcome = fetch::fetch_all(config, transport, pacer)?;

    if let StopReason::Aborted { status, .. } = &outcome.stop {
        warn!(
            status,
            pages = outcome.pages,
            "Search stopped early; writing {} issue(s) collected so far",
            outcome.issues.len()
        );
    }

    let written = write_issues(&outcome.issues, &config.output, config.write_mode)?;
    if written == 0 {
        info!("No git issues found; output left untouched");
    }
    Ok(written)
}
