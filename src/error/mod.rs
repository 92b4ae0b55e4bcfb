//! Error types and handling for `git_issues`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Supports `anyhow` integration for ad-hoc failures
//! - Provides recovery hints for user-facing errors
//! - Maps every error kind to a stable process exit code
//!
//! A non-success HTTP status from the search API is not an error: the
//! fetcher reports it as a soft stop and keeps partial results.

use thiserror::Error;

/// Primary error type for `git_issues` operations.
#[derive(Error, Debug)]
pub enum IssuesError {
    // === Configuration Errors ===
    /// An option value failed validation.
    #[error("Invalid option: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    // === Transport Errors ===
    /// The request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // === Upstream Schema Errors ===
    /// The page body was not valid search-result JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An item in the search results lacks a required field.
    #[error("Malformed upstream record{}: {reason}", format_number(.number))]
    MalformedRecord { number: Option<u64>, reason: String },

    /// The same issue number was returned twice within one run.
    #[error("Duplicate issue number in search results: #{number}")]
    DuplicateIssue { number: u64 },

    // === I/O Errors ===
    /// Writing the output document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[allow(clippy::ref_option)]
fn format_number(number: &Option<u64>) -> String {
    number.map_or_else(String::new, |n| format!(" #{n}"))
}

impl IssuesError {
    /// Create a configuration error for a specific option.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { .. } => Some("Run: git-issues --help"),
            Self::Http(_) => Some("Check network access and the --api-url value"),
            Self::Io(_) => Some("Check that the --file path is writable"),
            Self::MalformedRecord { .. } | Self::Json(_) => {
                Some("The search API schema may have changed; rerun with -vv for details")
            }
            Self::DuplicateIssue { .. } => {
                Some("Results shifted while paging; rerun with a narrower --query")
            }
            Self::Other(_) => None,
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 2,
            Self::Http(_) => 3,
            Self::Json(_) | Self::MalformedRecord { .. } | Self::DuplicateIssue { .. } => 4,
            Self::Io(_) => 5,
            Self::Other(_) => 1,
        }
    }
}

/// Result type using `IssuesError`.
pub type Result<T> = std::result::Result<T, IssuesError>;
