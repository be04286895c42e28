// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test log reading
//!
//! A log captured with `cargo test > test_results` opens with a banner
//! (`running N tests`) and closes with the `test result: ...` summary.
//! Everything in between is one test outcome per line. [`trim_window`]
//! drops the framing by position, not by content.

use std::path::Path;

use tracing::debug;

use crate::error::ReportError;

/// Conventional name of the captured log, as in `cargo test > test_results`
pub const DEFAULT_INPUT_PATH: &str = "test_results";

/// Number of banner lines dropped from the start of the log
pub const HEADER_LINES: usize = 2;

/// Number of summary lines dropped from the end of the log
pub const FOOTER_LINES: usize = 4;

/// A line of the input together with its position in the original file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the input file
    pub number: usize,
    /// Line content without its terminator
    pub text: String,
}

impl SourceLine {
    /// Create a new source line
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Apply the fixed head/tail trim window to the log contents
///
/// Inputs with `HEADER_LINES + FOOTER_LINES` lines or fewer yield an empty
/// sequence.
#[must_use]
pub fn trim_window(content: &str) -> Vec<SourceLine> {
    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();

    if total <= HEADER_LINES + FOOTER_LINES {
        debug!(total, "Test log shorter than trim window");
        return Vec::new();
    }

    lines[HEADER_LINES..total - FOOTER_LINES]
        .iter()
        .enumerate()
        .map(|(idx, text)| SourceLine::new(HEADER_LINES + idx + 1, *text))
        .collect()
}

/// Read a test log from disk and apply the trim window
///
/// # Errors
///
/// Returns `ReportError::ReadInput` if the file is missing, unreadable or
/// not valid UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<SourceLine>, ReportError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = trim_window(&content);
    debug!(path = %path.display(), lines = lines.len(), "Read test log");
    Ok(lines)
}
