// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testreport library
//!
//! This module exports the command-line configuration and runner for use in
//! integration tests.

pub mod config;
pub mod run;
