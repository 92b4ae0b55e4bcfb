//! Run configuration for `git_issues`.
//!
//! Everything comes from command-line flags. [`QueryConfig`] is built once
//! at startup, validated, and then only read.

use crate::cli::Cli;
use crate::error::{IssuesError, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Default output file.
pub const DEFAULT_OUTPUT_FILE: &str = "git_issues.csv";
/// Default search filter: merged pull requests.
pub const DEFAULT_QUERY: &str = "is:pr+is:merged";
/// Default and maximum `per_page` accepted by the search API.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Public GitHub REST API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Pause between page requests, in seconds.
pub const DEFAULT_DELAY_SECS: u64 = 10;

/// Where the output document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// An empty path means standard output.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.trim().is_empty() {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(path))
        }
    }
}

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Add header and rows after any existing content.
    #[default]
    Append,
    /// Truncate the file first.
    Overwrite,
}

/// Immutable parameters of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub owner: String,
    pub repo: String,
    pub query: String,
    pub page_size: u32,
    pub output: OutputTarget,
    pub write_mode: WriteMode,
    pub api_url: String,
    pub delay: Duration,
}

impl QueryConfig {
    /// Build a config with defaults for everything but the repository.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if owner or repo is blank.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let config = Self {
            owner: owner.into(),
            repo: repo.into(),
            query: DEFAULT_QUERY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            write_mode: WriteMode::Append,
            api_url: DEFAULT_API_URL.to_string(),
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build and validate the config from parsed CLI flags.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a flag value is unusable.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let output = if cli.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::from_path(&cli.file)
        };
        let write_mode = if cli.overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        };

        let config = Self {
            owner: cli.owner.trim().to_string(),
            repo: cli.repo.trim().to_string(),
            query: cli.query.clone(),
            page_size: cli.page_size,
            output,
            write_mode,
            api_url: cli.api_url.trim().trim_end_matches('/').to_string(),
            delay: Duration::from_secs(cli.delay),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(IssuesError::invalid_config("owner", "cannot be empty"));
        }
        if self.repo.trim().is_empty() {
            return Err(IssuesError::invalid_config("repo", "cannot be empty"));
        }
        if self.page_size == 0 {
            return Err(IssuesError::invalid_config(
                "page_size",
                "must be at least 1",
            ));
        }
        if self.api_url.is_empty() {
            return Err(IssuesError::invalid_config("api_url", "cannot be empty"));
        }
        if self.page_size > DEFAULT_PAGE_SIZE {
            warn!(
                page_size = self.page_size,
                "Search API caps per_page at {}; paging will stop after the first page",
                DEFAULT_PAGE_SIZE
            );
        }
        Ok(())
    }

    /// Override the output target.
    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Override the query fragment.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Override the page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
