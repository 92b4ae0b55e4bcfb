//! Output formatting for `git_issues`.
//!
//! # CSV Output
//!
//! The [`csv`] module writes the 7-column document
//! (`html_url,title,state,created_at,closed_at,assignee,labels`) to a file
//! or to standard output.

pub mod csv;

pub use csv::{format_issue_row, write_csv, write_header, write_issues};
