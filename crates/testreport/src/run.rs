// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command execution
//!
//! Wires the parsed [`Config`] to the conversion pipeline in
//! `testreport-log` and sets up logging.

use anyhow::{Context, Result};
use testreport_log::{ReportSummary, convert};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` directives are honoured; the level chosen by `-v`/`-q` is
/// added on top. Calling this more than once is a no-op.
pub fn init_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .try_init();
}

/// Convert the configured test log into a report
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read, a malformed line is found in strict mode, or the report cannot be
/// written.
pub fn run(config: &Config) -> Result<ReportSummary> {
    config.validate()?;

    let input = config.input_path();
    let output = config.output_path();
    let policy = config.malformed_policy();
    debug!(input = %input.display(), output = %output.display(), ?policy, "Converting test log");

    convert(&input, &output, policy)
        .with_context(|| format!("Failed to convert {}", input.display()))
}

/// Render a run summary as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn summary_json(summary: &ReportSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize run summary")
}
