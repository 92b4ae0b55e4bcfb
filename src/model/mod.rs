//! Core data types for `git_issues`.
//!
//! This module defines the types that flow through the export pipeline:
//! - `SearchPage` - One page of the search API response
//! - `RawIssue` - One issue or pull request as returned by the API
//! - `ExtractedIssue` - The normalized 7-column CSV record
//! - `IssueMap` - Insertion-ordered, deduplicating accumulation map

use crate::error::{IssuesError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Column names of the output document, in order.
pub const CSV_COLUMNS: [&str; 7] = [
    "html_url",
    "title",
    "state",
    "created_at",
    "closed_at",
    "assignee",
    "labels",
];

/// One page of `GET /search/issues`.
///
/// Items stay untyped here so that a single malformed record can be
/// reported with its issue number instead of failing the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Absent or null counts as zero results.
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// A GitHub account reference (`user`, `assignee`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// An issue or pull request from the search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub html_url: String,
    pub title: String,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub assignee: Option<Account>,
    #[serde(default)]
    pub user: Option<Account>,
    /// The key must be present; a null value means no labels.
    #[serde(deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Label>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A normalized record, one CSV row.
///
/// Always holds exactly one value per entry of [`CSV_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIssue {
    fields: [String; 7],
}

impl ExtractedIssue {
    #[must_use]
    pub const fn new(fields: [String; 7]) -> Self {
        Self { fields }
    }

    #[must_use]
    pub const fn fields(&self) -> &[String; 7] {
        &self.fields
    }

    #[must_use]
    pub fn html_url(&self) -> &str {
        &self.fields[0]
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields[1]
    }

    #[must_use]
    pub fn closed_at(&self) -> &str {
        &self.fields[4]
    }

    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.fields[5]
    }

    #[must_use]
    pub fn labels(&self) -> &str {
        &self.fields[6]
    }
}

/// Accumulated search results keyed by issue number.
///
/// Iteration follows insertion order, which is the API's `created desc`
/// order across pages.
#[derive(Debug, Clone, Default)]
pub struct IssueMap {
    entries: Vec<(u64, ExtractedIssue)>,
    index: HashMap<u64, usize>,
}

impl IssueMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its issue number.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIssue` if the number is already present; the map
    /// is left unchanged.
    pub fn insert(&mut self, number: u64, issue: ExtractedIssue) -> Result<()> {
        if self.index.contains_key(&number) {
            return Err(IssuesError::DuplicateIssue { number });
        }
        self.index.insert(number, self.entries.len());
        self.entries.push((number, issue));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Issue numbers in insertion order.
    pub fn numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|(number, _)| *number)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ExtractedIssue> {
        self.entries.iter().map(|(_, issue)| issue)
    }
}
