// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

#![no_main]

//! Fuzz target for report rendering
//!
//! Any document that parses must render without panicking, whatever its
//! counts, names and captured output look like.

use libfuzzer_sys::fuzz_target;

use nunit_results::parse_test_run;
use nunit_summary::annotate::AnnotationPaths;
use nunit_summary::console::RecordingConsole;
use nunit_summary::report::ReportRenderer;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data)
        && let Ok(run) = parse_test_run(input)
    {
        let mut console = RecordingConsole::new();
        let paths = AnnotationPaths::new("Game", "/github/workspace");
        let markdown = ReportRenderer::new(&mut console, &paths).render(&[run]);
        assert!(markdown.starts_with("# Test Results Summary"));
    }
});
