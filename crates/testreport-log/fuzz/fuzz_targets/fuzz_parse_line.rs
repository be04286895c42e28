// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single line parsing
//!
//! `parse_line` must return a record or a `LineError` for any input, never
//! panic on short or oddly delimited lines.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testreport_log::parse_line;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Ok(record) = parse_line(line) {
            assert!(!record.result.is_empty());
            assert!(!record.result.contains(' '));
        }
    }
});
