// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testreport-log: Captured test log processing for testreport
//!
//! This library crate turns the captured output of `cargo test` into a
//! markdown summary table: read the log, trim the banner and summary, parse
//! one record per line and render the report.
//!
//! # Example
//!
//! ```no_run
//! use testreport_log::{MalformedPolicy, convert};
//!
//! let summary = convert("test_results", "testreport.md", MalformedPolicy::Skip).unwrap();
//! println!("{} rows written", summary.rows);
//! ```

pub mod error;
pub mod parser;
pub mod reader;
pub mod record;
pub mod report;
pub mod table;
pub mod writer;

pub use error::{LineError, ReportError};
pub use parser::{MalformedPolicy, ParseOutcome, SkippedLine, parse_line, parse_lines};
pub use reader::{DEFAULT_INPUT_PATH, SourceLine, read_lines, trim_window};
pub use record::{Record, TestOutcome};
pub use report::{ReportSummary, convert};
pub use table::{OutcomeCounts, Table};
pub use writer::{DEFAULT_OUTPUT_PATH, write_report};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::parser::{MalformedPolicy, parse_lines};
    pub use crate::reader::read_lines;
    pub use crate::record::{Record, TestOutcome};
    pub use crate::report::{ReportSummary, convert};
    pub use crate::table::Table;
}
