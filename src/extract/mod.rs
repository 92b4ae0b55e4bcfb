//! Record extraction: raw search items to fixed-width CSV records.
//!
//! The output row is made delimiter-safe without quoting: commas in the
//! title become `/`. Other fields are copied verbatim.

use crate::error::{IssuesError, Result};
use crate::model::{ExtractedIssue, RawIssue};
use serde_json::Value;

/// Decode one search item into a typed record.
///
/// # Errors
///
/// Returns `MalformedRecord` if a required field is missing or has the
/// wrong type. The issue number is included when it can be read.
pub fn parse_issue(item: Value) -> Result<RawIssue> {
    let number = item.get("number").and_then(Value::as_u64);
    serde_json::from_value(item).map_err(|e| IssuesError::MalformedRecord {
        number,
        reason: e.to_string(),
    })
}

/// Replace every comma in a title with `/`.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    title.replace(',', "/")
}

/// Login of the assignee, falling back to the author, else empty.
#[must_use]
pub fn attribution(issue: &RawIssue) -> String {
    issue
        .assignee
        .as_ref()
        .or(issue.user.as_ref())
        .map(|account| account.login.clone())
        .unwrap_or_default()
}

/// Label names joined by a single space, in API order.
#[must_use]
pub fn join_labels(issue: &RawIssue) -> String {
    issue
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a raw record to its unique key and normalized row.
#[must_use]
pub fn extract_issue(issue: &RawIssue) -> (u64, ExtractedIssue) {
    let fields = [
        issue.html_url.clone(),
        sanitize_title(&issue.title),
        issue.state.clone(),
        issue.created_at.clone(),
        issue.closed_at.clone().unwrap_or_default(),
        attribution(issue),
        join_labels(issue),
    ];
    (issue.number, ExtractedIssue::new(fields))
}

/// Decode and extract in one step.
///
/// # Errors
///
/// Propagates `MalformedRecord` from [`parse_issue`].
pub fn extract_item(item: Value) -> Result<(u64, ExtractedIssue)> {
    let raw = parse_issue(item)?;
    Ok(extract_issue(&raw))
}
