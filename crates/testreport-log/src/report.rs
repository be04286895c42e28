// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end conversion of a test log into a report file

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::ReportError;
use crate::parser::{MalformedPolicy, SkippedLine, parse_lines};
use crate::reader::read_lines;
use crate::table::{OutcomeCounts, Table};
use crate::writer::write_report;

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Input log path
    pub input: PathBuf,
    /// Report path
    pub output: PathBuf,
    /// Number of data rows written
    pub rows: usize,
    /// Lines left out of the report
    pub skipped: Vec<SkippedLine>,
    /// Rows by outcome
    pub counts: OutcomeCounts,
}

/// Read `input`, parse it and write the markdown report to `output`
///
/// Nothing is written when reading fails, or when a malformed line is found
/// under [`MalformedPolicy::Abort`].
///
/// # Errors
///
/// Returns `ReportError::ReadInput`, `ReportError::MalformedLine` or
/// `ReportError::WriteOutput`.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    policy: MalformedPolicy,
) -> Result<ReportSummary, ReportError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let lines = read_lines(input)?;
    let parsed = parse_lines(&lines, policy)?;
    let table = Table::new(parsed.records);
    write_report(&table, output)?;

    let counts = table.summary();
    info!(
        output = %output.display(),
        rows = table.len(),
        passed = counts.passed,
        failed = counts.failed,
        ignored = counts.ignored,
        skipped = parsed.skipped.len(),
        "Test report written"
    );

    Ok(ReportSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: table.len(),
        skipped: parsed.skipped,
        counts,
    })
}
