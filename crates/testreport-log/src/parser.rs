// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test outcome line parsing
//!
//! Each line inside the trim window looks like
//! `test <module>::<a>::<b>::<name> ... <status>`. The first `::` segment is
//! the module, the fourth holds the test name and the text after the last
//! `...` is the status.
//!
//! # Example
//!
//! ```
//! use testreport_log::parser::parse_line;
//!
//! let record = parse_line("test mymodel::inner::sub::my_test_name ... ok").unwrap();
//! assert_eq!(record.module, "mymodel");
//! assert_eq!(record.test, "my_test_name");
//! assert_eq!(record.result, "ok");
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{LineError, ReportError};
use crate::reader::SourceLine;
use crate::record::Record;

/// Prefix the libtest harness prints before every test outcome
pub const TEST_PREFIX: &str = "test ";

/// Separator between hierarchical name segments
pub const SEGMENT_DELIMITER: &str = "::";

/// Separator between the test name and its status
pub const STATUS_SEPARATOR: &str = " ... ";

/// Marker preceding the status token in the trailing segment
pub const STATUS_MARKER: &str = "...";

/// Minimum number of name segments a test line must carry
pub const MIN_SEGMENTS: usize = 4;

/// Index of the segment holding `name ... status`
const NAME_SEGMENT: usize = 3;

/// What to do with lines that do not match the expected shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log the line and leave it out of the report
    #[default]
    Skip,
    /// Fail the whole run on the first malformed line
    Abort,
}

/// A line left out of the report under [`MalformedPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input file
    pub line: usize,
    /// Raw line content
    pub content: String,
    /// Why the line was rejected
    pub reason: String,
}

/// Records parsed from a trimmed log, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Successfully parsed records
    pub records: Vec<Record>,
    /// Lines that were skipped
    pub skipped: Vec<SkippedLine>,
}

/// Remove every newline, carriage return and space from a status token
///
/// Stripping is idempotent.
#[must_use]
pub fn strip_status(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ' '))
        .collect()
}

/// Parse a single test outcome line
///
/// # Errors
///
/// Returns a [`LineError`] if the line has fewer than [`MIN_SEGMENTS`]
/// segments, lacks the status marker, or carries an empty status.
pub fn parse_line(line: &str) -> Result<Record, LineError> {
    let body = line.strip_prefix(TEST_PREFIX).unwrap_or(line);
    let segments: Vec<&str> = body.split(SEGMENT_DELIMITER).collect();

    if segments.len() < MIN_SEGMENTS {
        return Err(LineError::TooFewSegments {
            expected: MIN_SEGMENTS,
            found: segments.len(),
        });
    }

    let last = segments[segments.len() - 1];
    if !last.contains(STATUS_MARKER) {
        return Err(LineError::MissingStatus);
    }
    // Markers are split left to right, so `....ok` leaves `.ok`
    let status = strip_status(last.split(STATUS_MARKER).last().unwrap_or(last));
    if status.is_empty() {
        return Err(LineError::EmptyStatus);
    }

    let name_segment = segments[NAME_SEGMENT];
    let test = name_segment
        .split(STATUS_SEPARATOR)
        .next()
        .unwrap_or(name_segment);

    Ok(Record::new(segments[0], test, status))
}

/// Parse every line of a trimmed log
///
/// # Errors
///
/// Returns `ReportError::MalformedLine` for the first malformed line when
/// `policy` is [`MalformedPolicy::Abort`].
pub fn parse_lines(
    lines: &[SourceLine],
    policy: MalformedPolicy,
) -> Result<ParseOutcome, ReportError> {
    let mut outcome = ParseOutcome::default();

    for line in lines {
        match parse_line(&line.text) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => match policy {
                MalformedPolicy::Abort => {
                    return Err(ReportError::MalformedLine {
                        line: line.number,
                        content: line.text.clone(),
                        reason,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!(
                        line = line.number,
                        content = %line.text,
                        %reason,
                        "Skipping malformed test line"
                    );
                    outcome.skipped.push(SkippedLine {
                        line: line.number,
                        content: line.text.clone(),
                        reason: reason.to_string(),
                    });
                }
            },
        }
    }

    debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "Parsed test log"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_parse_passing_line() {
        let record = parse_line("test mymodel::inner::sub::my_test_name ... ok\n").expect("parse");
        assert_eq!(record, Record::new("mymodel", "my_test_name", "ok"));
    }

    #[test]
    fn test_parse_failing_line() {
        let record = parse_line("test mod::a::b::case ... FAILED\n").expect("parse");
        assert_eq!(record, Record::new("mod", "case", "FAILED"));
    }

    #[test]
    fn test_parse_ignored_with_reason() {
        let record =
            parse_line("test app::models::item::tests::slow ... ignored, needs db").expect("parse");
        assert_eq!(record.module, "app");
        // Only the fourth segment is taken as the name, even when deeper ones follow
        assert_eq!(record.test, "tests");
        assert_eq!(record.result, "ignored,needsdb");
    }

    #[test]
    fn test_parse_without_prefix() {
        let record = parse_line("m::a::b::t ... ok").expect("parse");
        assert_eq!(record, Record::new("m", "t", "ok"));
    }

    #[test]
    fn test_prefix_only_stripped_once() {
        let record = parse_line("test test m::a::b::t ... ok").expect("parse");
        assert_eq!(record.module, "test m");
    }

    #[test]
    fn test_parse_too_few_segments() {
        let err = parse_line("test tests::it_works ... ok").unwrap_err();
        assert_eq!(
            err,
            LineError::TooFewSegments {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_missing_status() {
        let err = parse_line("test a::b::c::d").unwrap_err();
        assert_eq!(err, LineError::MissingStatus);
    }

    #[test]
    fn test_parse_empty_status() {
        let err = parse_line("test a::b::c::d ...   ").unwrap_err();
        assert_eq!(err, LineError::EmptyStatus);
    }

    #[test]
    fn test_parse_dot_run_keeps_leftover_dot() {
        let record = parse_line("test a::b::c::d ....ok").expect("parse");
        assert_eq!(record.result, ".ok");

        let record = parse_line("test a::b::c::d ... ok...FAILED").expect("parse");
        assert_eq!(record.result, "FAILED");
    }

    #[test]
    fn test_strip_status() {
        assert_eq!(strip_status(" ok\n"), "ok");
        assert_eq!(strip_status(" FAILED \r\n"), "FAILED");
        assert_eq!(strip_status(&strip_status(" a b ")), "ab");
    }

    #[test]
    fn test_parse_lines_skip_policy() {
        let lines = vec![
            SourceLine::new(3, "test a::b::c::one ... ok"),
            SourceLine::new(4, "some stray output"),
            SourceLine::new(5, "test a::b::c::two ... FAILED"),
        ];

        let outcome = parse_lines(&lines, MalformedPolicy::Skip).expect("parse");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].test, "one");
        assert_eq!(outcome.records[1].test, "two");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line, 4);
        assert_eq!(outcome.skipped[0].content, "some stray output");
    }

    #[test]
    fn test_parse_lines_abort_policy() {
        let lines = vec![
            SourceLine::new(3, "test a::b::c::one ... ok"),
            SourceLine::new(4, "test short::name ... ok"),
        ];

        match parse_lines(&lines, MalformedPolicy::Abort) {
            Err(ReportError::MalformedLine {
                line,
                content,
                reason,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "test short::name ... ok");
                assert!(matches!(reason, LineError::TooFewSegments { found: 2, .. }));
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_lines_empty() {
        let outcome = parse_lines(&[], MalformedPolicy::Abort).expect("parse");
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());
    }
}
