//! CSV output for `git_issues`.
//!
//! Rows are joined with bare commas and never quoted; the extractor has
//! already replaced commas in titles.

use crate::config::{OutputTarget, WriteMode};
use crate::error::Result;
use crate::model::{CSV_COLUMNS, ExtractedIssue, IssueMap};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Write CSV header row to the given writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    let header = CSV_COLUMNS.join(",");
    writeln!(writer, "{header}")
}

/// Format a single record as a CSV row.
#[must_use]
pub fn format_issue_row(issue: &ExtractedIssue) -> String {
    issue.fields().join(",")
}

/// Write the header and every record, in map order.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(writer: &mut W, issues: &IssueMap) -> io::Result<()> {
    write_header(writer)?;
    for issue in issues.records() {
        let row = format_issue_row(issue);
        writeln!(writer, "{row}")?;
    }
    Ok(())
}

/// Write the output document to `target`.
///
/// An empty map is a no-op: the file is neither created nor truncated and
/// nothing is printed. Returns the number of data rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_issues(issues: &IssueMap, target: &OutputTarget, mode: WriteMode) -> Result<usize> {
    if issues.is_empty() {
        return Ok(0);
    }

    info!("Write total={} git issues to csv file", issues.len());

    match target {
        OutputTarget::File(path) => {
            let mut options = OpenOptions::new();
            options.create(true);
            match mode {
                WriteMode::Append => options.append(true),
                WriteMode::Overwrite => options.write(true).truncate(true),
            };
            let file = options.open(path)?;
            let mut writer = BufWriter::new(file);
            write_csv(&mut writer, issues)?;
            writer.flush()?;
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_csv(&mut writer, issues)?;
            writer.flush()?;
        }
    }

    Ok(issues.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use std::fs;
    use tempfile::TempDir;
    use tracing::info;

    fn make_record(number: u64, title: &str, labels: &str) -> ExtractedIssue {
        ExtractedIssue::new([
            format!("https://github.com/acme/widget/pull/{number}"),
            title.to_string(),
            "closed".to_string(),
            "2025-01-15T12:00:00Z".to_string(),
            "2025-01-16T08:30:00Z".to_string(),
            "alice".to_string(),
            labels.to_string(),
        ])
    }

    fn sample_map() -> IssueMap {
        let mut map = IssueMap::new();
        map.insert(2, make_record(2, "Second", "")).unwrap();
        map.insert(1, make_record(1, "First/ really", "bug ui")).unwrap();
        map
    }

    #[test]
    fn test_write_header() {
        let mut output = Vec::new();
        write_header(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "html_url,title,state,created_at,closed_at,assignee,labels\n"
        );
    }

    #[test]
    fn test_format_issue_row() {
        let row = format_issue_row(&make_record(7, "Simple Task", "docs"));
        assert_eq!(
            row,
            "https://github.com/acme/widget/pull/7,Simple Task,closed,2025-01-15T12:00:00Z,2025-01-16T08:30:00Z,alice,docs"
        );
    }

    fn render(issues: &IssueMap) -> String {
        let mut output = Vec::new();
        write_csv(&mut output, issues).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_csv() {
        insta::assert_snapshot!(render(&sample_map()), @r"
        html_url,title,state,created_at,closed_at,assignee,labels
        https://github.com/acme/widget/pull/2,Second,closed,2025-01-15T12:00:00Z,2025-01-16T08:30:00Z,alice,
        https://github.com/acme/widget/pull/1,First/ really,closed,2025-01-15T12:00:00Z,2025-01-16T08:30:00Z,alice,bug ui
        ");
    }

    #[test]
    fn test_write_csv_empty_map_is_header_only() {
        assert_eq!(render(&IssueMap::new()), format!("{}\n", CSV_COLUMNS.join(",")));
    }

    #[test]
    fn test_empty_map_leaves_file_untouched() {
        init_test_logging();
        info!("test_empty_map_leaves_file_untouched: starting");
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("existing.csv");
        fs::write(&existing, "previous run\n").unwrap();
        let missing = dir.path().join("missing.csv");

        let empty = IssueMap::new();
        let written = write_issues(
            &empty,
            &OutputTarget::File(existing.clone()),
            WriteMode::Overwrite,
        )
        .unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "previous run\n");

        write_issues(&empty, &OutputTarget::File(missing.clone()), WriteMode::Append).unwrap();
        assert!(!missing.exists());
        info!("test_empty_map_leaves_file_untouched: assertions passed");
    }

    #[test]
    fn test_append_mode_accumulates() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("issues.csv");
        let target = OutputTarget::File(path.clone());
        let map = sample_map();

        assert_eq!(write_issues(&map, &target, WriteMode::Append).unwrap(), 2);
        assert_eq!(write_issues(&map, &target, WriteMode::Append).unwrap(), 2);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 6);
        assert_eq!(contents, format!("{0}{0}", render(&map)));
    }

    #[test]
    fn test_overwrite_mode_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("issues.csv");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        let map = sample_map();
        write_issues(&map, &OutputTarget::File(path.clone()), WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&map));
    }
}
