// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for captured test output
//!
//! This fuzzes `parse_utp` and `sanitize_log`, which both scan free-form
//! output written by the test runner.

#![no_main]

use libfuzzer_sys::fuzz_target;

use nunit_results::utp::UTP_MARKER;
use nunit_results::{parse_utp, sanitize_log};

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        let _ = parse_utp(output);
        for line in sanitize_log(output) {
            assert!(!line.contains(UTP_MARKER));
        }
    }
});
