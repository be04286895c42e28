// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the in-memory pipeline
//!
//! Trims, parses with the skip policy and renders markdown. Every kept line
//! must end up either as a row or as a skipped line.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testreport_log::{MalformedPolicy, Table, parse_lines, trim_window};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let lines = trim_window(content);
        let outcome = parse_lines(&lines, MalformedPolicy::Skip).expect("skip policy never fails");
        assert_eq!(outcome.records.len() + outcome.skipped.len(), lines.len());

        let rows = outcome.records.len();
        let markdown = Table::new(outcome.records).render_markdown();
        assert!(markdown.lines().count() >= 4 + rows);
    }
});
