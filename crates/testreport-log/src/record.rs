// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Parsed test records

use serde::{Deserialize, Serialize};

/// One parsed `(module, test, result)` triple from a single log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// First name segment (the crate or top-level module)
    pub module: String,
    /// Test function name
    pub test: String,
    /// Raw status token, e.g. `ok` or `FAILED`
    pub result: String,
}

impl Record {
    /// Create a new record
    #[must_use]
    pub fn new(
        module: impl Into<String>,
        test: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            test: test.into(),
            result: result.into(),
        }
    }

    /// Classify the raw status token
    #[must_use]
    pub fn outcome(&self) -> TestOutcome {
        TestOutcome::from_status(&self.result)
    }
}

/// Possible test outcomes as printed by the libtest harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    /// `ok`
    Passed,
    /// `FAILED`
    Failed,
    /// `ignored`, optionally followed by a reason
    Ignored,
    /// Anything else (e.g. `bench`)
    Unknown,
}

impl TestOutcome {
    /// Classify a stripped status token
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "ok" => Self::Passed,
            "FAILED" => Self::Failed,
            s if s.starts_with("ignored") => Self::Ignored,
            _ => Self::Unknown,
        }
    }
}
