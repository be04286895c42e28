// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testreport-log

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a test log into a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The captured test log could not be read
    #[error("Failed to read test log {}: {source}", path.display())]
    ReadInput {
        /// Path of the input file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written
    #[error("Failed to write report {}: {source}", path.display())]
    WriteOutput {
        /// Path of the output file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line inside the trim window does not have the expected shape
    #[error("Malformed test line {line}: {reason}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the input file
        line: usize,
        /// Raw line content
        content: String,
        /// What was wrong with the line
        reason: LineError,
    },
}

/// Why a single line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Not enough `::`-separated name segments
    #[error("expected at least {expected} `::` segments, found {found}")]
    TooFewSegments {
        /// Minimum segment count
        expected: usize,
        /// Segment count actually present
        found: usize,
    },

    /// The trailing segment carries no `...` status marker
    #[error("missing `...` status marker")]
    MissingStatus,

    /// The status token is empty after stripping
    #[error("empty status")]
    EmptyStatus,
}
