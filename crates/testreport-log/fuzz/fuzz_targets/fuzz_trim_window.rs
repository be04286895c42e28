// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the head/tail trim window

#![no_main]

use libfuzzer_sys::fuzz_target;

use testreport_log::reader::{FOOTER_LINES, HEADER_LINES};
use testreport_log::trim_window;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let total = content.lines().count();
        let kept = trim_window(content);
        assert_eq!(
            kept.len(),
            total.saturating_sub(HEADER_LINES + FOOTER_LINES)
        );
    }
});
