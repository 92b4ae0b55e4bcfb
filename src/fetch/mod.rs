//! Paginated fetch of the issue search API.
//!
//! The loop walks pages starting at 1 until the API is exhausted or a
//! request is refused. Every soft stop returns what was accumulated so far;
//! schema problems and duplicate issue numbers abort the run with an error.

mod pacer;
mod transport;

pub use pacer::{NoDelay, Pacer, ThreadSleepPacer};
pub use transport::{HttpResponse, ReqwestTransport, SearchTransport};

use crate::config::QueryConfig;
use crate::error::Result;
use crate::extract::extract_item;
use crate::model::{IssueMap, SearchPage};
use crate::util::encode_keeping;
use crate::util::progress::PageProgress;
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Why pagination stopped without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The API has no more results.
    Completed,
    /// A page request returned a non-success status.
    Aborted {
        url: String,
        status: u16,
        reason: String,
    },
}

/// Result of a soft-stopped fetch loop.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub issues: IssueMap,
    pub stop: StopReason,
    /// Number of page requests issued.
    pub pages: u32,
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.stop, StopReason::Completed)
    }
}

/// Build the search URL for `page`.
///
/// Owner and repo keep `/` literal; the query keeps `+` literal because the
/// search syntax joins qualifiers with it.
#[must_use]
pub fn build_search_url(config: &QueryConfig, page: u32) -> String {
    format!(
        "{}/search/issues?sort=created&order=desc&per_page={}&page={}&q=repo:{}/{}+{}",
        config.api_url,
        config.page_size,
        page,
        encode_keeping(&config.owner, '/'),
        encode_keeping(&config.repo, '/'),
        encode_keeping(&config.query, '+'),
    )
}

/// Fetch every page for `config` and return the deduplicated records.
///
/// # Errors
///
/// Returns an error if a request cannot be sent, a page body is not valid
/// JSON, an item lacks a required field, or an issue number repeats.
pub fn fetch_all(
    config: &QueryConfig,
    transport: &dyn SearchTransport,
    pacer: &dyn Pacer,
) -> Result<FetchOutcome> {
    let progress = PageProgress::start(&format!("{}/{}", config.owner, config.repo));
    let outcome = fetch_pages(config, transport, pacer, &progress);
    progress.finish();
    outcome
}

fn fetch_pages(
    config: &QueryConfig,
    transport: &dyn SearchTransport,
    pacer: &dyn Pacer,
    progress: &PageProgress,
) -> Result<FetchOutcome> {
    let page_size = config.page_size as usize;
    let mut issues = IssueMap::new();
    let mut page: u32 = 1;

    loop {
        let url = build_search_url(config, page);
        progress.suspend(|| info!("Getting git issues: {url}"));

        let response = transport.get(&url)?;
        if !response.is_success() {
            error!(
                "Failed to get git issues for {url}, error_code={}, reason={}",
                response.status, response.reason
            );
            return Ok(FetchOutcome {
                issues,
                stop: StopReason::Aborted {
                    url,
                    status: response.status,
                    reason: response.reason,
                },
                pages: page,
            });
        }

        if response.body.trim().is_empty() {
            info!("Finished getting all git issues");
            return Ok(completed(issues, page));
        }

        let body: Value = serde_json::from_str(&response.body)?;
        if is_empty_document(&body) {
            info!("Finished getting all git issues");
            return Ok(completed(issues, page));
        }

        let search: SearchPage = serde_json::from_value(body)?;
        let total_count = search.total_count.unwrap_or(0);
        if total_count == 0 {
            info!("Finished getting all git issues");
            return Ok(completed(issues, page));
        }

        let received = search.items.len();
        for item in search.items {
            let (number, record) = extract_item(item)?;
            debug!(number, "extracted issue");
            issues.insert(number, record)?;
        }
        progress.page_done(page, issues.len());

        if search.incomplete_results {
            warn!(
                "Got incomplete results for {url}, expected={}, got={}",
                config.page_size, total_count
            );
        } else if received < page_size {
            info!("Finished getting all git issues");
            return Ok(completed(issues, page));
        }

        progress.suspend(|| info!("Got total={} git issues so far", issues.len()));
        page += 1;
        progress.waiting(config.delay);
        pacer.pause(config.delay);
    }
}

/// A JSON body with nothing in it (`null`, `{}`, `[]`, `""`, `false`, `0`).
fn is_empty_document(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_u64() == Some(0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn completed(issues: IssueMap, pages: u32) -> FetchOutcome {
    FetchOutcome {
        issues,
        stop: StopReason::Completed,
        pages,
    }
}
