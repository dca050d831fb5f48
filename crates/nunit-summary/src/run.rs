// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Summary run orchestration
//!
//! Ties discovery, parsing and rendering together: every result file found
//! is parsed, the surviving runs are rendered into a single document and the
//! document is handed to the report sink.
//!
//! # Example
//!
//! ```no_run
//! use nunit_summary::config::Config;
//! use nunit_summary::console::GithubConsole;
//! use nunit_summary::run::run;
//! use nunit_summary::summary::StepSummary;
//!
//! let config = Config {
//!     test_results: "artifacts/*-results.xml".into(),
//!     ..Default::default()
//! };
//! let root = std::env::current_dir().expect("cwd");
//! let mut console = GithubConsole::stdout();
//! let mut sink = StepSummary::new(None);
//! let stats = run(&config, &root, &mut console, &mut sink).expect("summary");
//! println!("{} runs, {} non-passing tests", stats.runs, stats.failing_cases);
//! ```

use std::path::Path;

use nunit_results::{TestRun, parse_test_results};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::console::Console;
use crate::discovery::discover_files;
use crate::error::SummaryError;
use crate::report::ReportRenderer;
use crate::summary::ReportSink;

/// Statistics from a summary run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of result files discovered
    pub files_found: usize,
    /// Number of test runs rendered
    pub runs: usize,
    /// Number of files that could not be parsed
    pub skipped_files: usize,
    /// Number of non-passing test cases across all runs, skipped and
    /// inconclusive ones included
    pub failing_cases: usize,
}

impl RunStats {
    /// Check if any test case did not pass
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failing_cases > 0
    }
}

/// Summarize the result files matching the configured patterns
///
/// Relative patterns are resolved against `root`. Progress and annotations
/// go to `console`; the report is appended to `sink` and flushed once.
///
/// # Errors
///
/// Returns `SummaryError::Discovery` for an invalid pattern and
/// `SummaryError::Report` if the report cannot be written. Unreadable or
/// malformed result files are reported to the console and skipped.
pub fn run(
    config: &Config,
    root: &Path,
    console: &mut dyn Console,
    sink: &mut dyn ReportSink,
) -> Result<RunStats, SummaryError> {
    console.info("Gathering Test Results...");
    console.info(&format!("test-results:\n  > {}", config.test_results));

    let files = discover_files(&config.test_results, root)?;
    let mut stats = RunStats {
        files_found: files.len(),
        ..Default::default()
    };
    if files.is_empty() {
        console.warning("No test result files found!");
        return Ok(stats);
    }

    console.info(&format!("Found {} test result files:", files.len()));
    for file in &files {
        console.info(&format!("  > {}", file.display()));
    }

    let mut runs = Vec::with_capacity(files.len());
    for file in &files {
        match parse_test_results(file) {
            Ok(test_run) => {
                dump_run(file, &test_run);
                let non_passing = test_run.failing_cases().len();
                console.info(&format!(
                    "{}: {} non-passing of {} tests",
                    file.display(),
                    non_passing,
                    test_run.total
                ));
                stats.failing_cases += non_passing;
                runs.push(test_run);
            }
            Err(e) => {
                warn!(path = %file.display(), error = %e, "skipping result file");
                console.error(&e.to_string(), None);
                stats.skipped_files += 1;
            }
        }
    }
    stats.runs = runs.len();

    let paths = config.annotation_paths();
    let markdown = ReportRenderer::new(console, &paths).render(&runs);
    sink.append(&markdown);
    sink.flush().map_err(SummaryError::Report)?;

    info!(
        files = stats.files_found,
        runs = stats.runs,
        skipped = stats.skipped_files,
        failing = stats.failing_cases,
        "summary written"
    );
    Ok(stats)
}

fn dump_run(file: &Path, test_run: &TestRun) {
    match serde_json::to_string_pretty(test_run) {
        Ok(json) => debug!(path = %file.display(), "parsed test run:\n{json}"),
        Err(e) => debug!(path = %file.display(), error = %e, "could not serialize test run"),
    }
}
