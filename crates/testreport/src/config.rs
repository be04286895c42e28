// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the testreport command
//!
//! Running with no arguments reads `test_results` and writes
//! `testreport.md` in the current directory.

use std::path::PathBuf;

use clap::Parser;
use testreport_log::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, MalformedPolicy};

/// Convert captured `cargo test` output into a markdown report
///
/// Capture the log first, e.g. `cargo test > test_results`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testreport")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the captured test log
    ///
    /// Defaults to `test_results` in the current directory.
    #[arg(short, long, env = "TESTREPORT_INPUT")]
    pub input: Option<PathBuf>,

    /// Path of the markdown report
    ///
    /// Any existing file is overwritten. Defaults to `testreport.md` in the
    /// current directory.
    #[arg(short, long, env = "TESTREPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Fail on the first malformed test line instead of skipping it
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the input path, using the conventional default if not specified
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }

    /// Get the output path, using the fixed default if not specified
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// How malformed lines are handled
    #[must_use]
    pub fn malformed_policy(&self) -> MalformedPolicy {
        if self.strict {
            MalformedPolicy::Abort
        } else {
            MalformedPolicy::Skip
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is an existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = self.output_path();
        if output.is_dir() {
            return Err(ConfigError::OutputIsDirectory(output));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Output path points at a directory
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(PathBuf),
}
