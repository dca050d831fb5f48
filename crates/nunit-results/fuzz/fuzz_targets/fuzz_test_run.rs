// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for NUnit result parsing
//!
//! This fuzzes `parse_test_run`, which decodes XML into the generic tree,
//! canonicalizes it and decodes the `test-run` node.

#![no_main]

use libfuzzer_sys::fuzz_target;

use nunit_results::parse_test_run;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string - invalid UTF-8 should be handled gracefully
    if let Ok(input) = std::str::from_utf8(data) {
        // parse_test_run should never panic on any input
        if let Ok(run) = parse_test_run(input) {
            let _ = run.test_mode();
            let _ = run.failing_cases();
        }
    }
});
