// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! In-memory report table and its markdown rendering

use serde::Serialize;

use crate::record::{Record, TestOutcome};

/// Fixed column titles of the report
pub const COLUMN_TITLES: [&str; 4] = ["Model", "Test", "Result", "Note"];

/// Level-1 heading written above the table
pub const REPORT_HEADING: &str = "Test Report";

/// Markdown table cell separator
const CELL_SEPARATOR: &str = "|";

/// Column titles plus the ordered records
///
/// The `Note` column is rendered in the header only; data rows always leave
/// it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Column titles, in render order
    pub titles: Vec<String>,
    /// Records, in input order
    pub records: Vec<Record>,
}

/// Per-outcome record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    /// Number of records
    pub total: usize,
    /// Records with an `ok` status
    pub passed: usize,
    /// Records with a `FAILED` status
    pub failed: usize,
    /// Records with an `ignored` status
    pub ignored: usize,
    /// Records with any other status
    pub unknown: usize,
}

impl OutcomeCounts {
    /// Check if no record failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Table {
    /// Create a table with the fixed report columns
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            titles: COLUMN_TITLES.iter().map(|t| (*t).to_string()).collect(),
            records,
        }
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records by outcome
    #[must_use]
    pub fn summary(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts {
            total: self.records.len(),
            ..OutcomeCounts::default()
        };
        for record in &self.records {
            match record.outcome() {
                TestOutcome::Passed => counts.passed += 1,
                TestOutcome::Failed => counts.failed += 1,
                TestOutcome::Ignored => counts.ignored += 1,
                TestOutcome::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    /// Render the full report as markdown
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# ");
        out.push_str(REPORT_HEADING);
        out.push_str("\n\n");

        push_row(&mut out, self.titles.iter().map(String::as_str));
        push_row(&mut out, self.titles.iter().map(|_| "-"));

        for record in &self.records {
            push_row(
                &mut out,
                [
                    record.module.as_str(),
                    record.test.as_str(),
                    record.result.as_str(),
                    "",
                ],
            );
        }
        out
    }
}

fn push_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    out.push_str(CELL_SEPARATOR);
    for cell in cells {
        out.push_str(cell);
        out.push_str(CELL_SEPARATOR);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_render_empty_table() {
        let table = Table::new(Vec::new());
        assert_eq!(
            table.render_markdown(),
            "# Test Report\n\n|Model|Test|Result|Note|\n|-|-|-|-|\n"
        );
    }

    #[test]
    fn test_render_two_rows() {
        let table = Table::new(vec![
            Record::new("mymodel", "my_test_name", "ok"),
            Record::new("mod", "case", "FAILED"),
        ]);
        assert_eq!(
            table.render_markdown(),
            "# Test Report\n\n\
             |Model|Test|Result|Note|\n\
             |-|-|-|-|\n\
             |mymodel|my_test_name|ok||\n\
             |mod|case|FAILED||\n"
        );
    }

    #[test]
    fn test_summary_counts() {
        let table = Table::new(vec![
            Record::new("a", "one", "ok"),
            Record::new("a", "two", "FAILED"),
            Record::new("a", "three", "ignored"),
            Record::new("a", "four", "bench"),
            Record::new("a", "five", "ok"),
        ]);
        let counts = table.summary();
        assert_eq!(counts.total, 5);
        assert_eq!(counts.passed, 2);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.ignored, 1);
        assert_eq!(counts.unknown, 1);
        assert!(!counts.all_passed());
    }

    #[test]
    fn test_titles_are_fixed() {
        let table = Table::new(Vec::new());
        assert_eq!(table.titles, vec!["Model", "Test", "Result", "Note"]);
        assert!(table.is_empty());
    }
}
