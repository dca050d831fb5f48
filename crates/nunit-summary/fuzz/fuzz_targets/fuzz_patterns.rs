// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

#![no_main]

//! Fuzz target for result file patterns
//!
//! Pattern parsing either succeeds or reports an invalid glob. Discovery is
//! not run, so the fuzzer never walks the file system.

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use nunit_summary::discovery::FilePatterns;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = FilePatterns::parse(input, Path::new("/github/workspace"));
    }
});
