//! `git_issues`: export GitHub issue search results to CSV.
//!
//! The pipeline is linear: build a search URL, fetch a page, extract the
//! seven output fields of every item, deduplicate by issue number, repeat
//! until the API is exhausted, then write the CSV document.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod model;
pub mod util;

pub use config::{OutputTarget, QueryConfig, WriteMode};
pub use error::{IssuesError, Result};
pub use fetch::{FetchOutcome, StopReason, fetch_all};
pub use model::{ExtractedIssue, IssueMap, RawIssue};
