// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown report rendering
//!
//! Modeled on the Unity Test Runner window: every test run gets a heading
//! and a table of counts, then each test case becomes a foldout with a
//! check mark or a cross. Failed cases are expanded and show the failure
//! message, the stack trace and the case's log output.
//!
//! Failure annotations are emitted while each case is rendered, from the
//! UTP events found in its captured output.

use nunit_results::{TestCase, TestRun, TestSuite, parse_utp, sanitize_log};
use tracing::debug;

use crate::annotate::AnnotationPaths;
use crate::console::{Console, SourceLocation};

/// Top-level heading of the document
pub const REPORT_TITLE: &str = "Test Results Summary";

const PASS_ICON: &str = "✅";
const FAIL_ICON: &str = "❌";

fn status_icon(passed: bool) -> &'static str {
    if passed { PASS_ICON } else { FAIL_ICON }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap `body` in a collapsible `<details>` section
#[must_use]
pub fn foldout_section(summary: &str, body: &str, open: bool) -> String {
    let open = if open { " open" } else { "" };
    format!("<details{open}>\n<summary>{summary}</summary>\n\n{body}\n</details>\n")
}

/// Renders test runs into a markdown report
pub struct ReportRenderer<'a> {
    console: &'a mut dyn Console,
    paths: &'a AnnotationPaths,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer emitting annotations to `console`
    pub fn new(console: &'a mut dyn Console, paths: &'a AnnotationPaths) -> Self {
        Self { console, paths }
    }

    /// Render the whole document
    pub fn render(&mut self, runs: &[TestRun]) -> String {
        let mut out = format!("# {REPORT_TITLE}\n\n");
        for (index, run) in runs.iter().enumerate() {
            out.push_str(&self.render_run(run, index + 1, runs.len()));
        }
        out
    }

    /// Render one run: heading, count table and every test case
    ///
    /// `ordinal` is 1-based; the run number only shows when `run_count > 1`.
    pub fn render_run(&mut self, run: &TestRun, ordinal: usize, run_count: usize) -> String {
        let mut out = run_heading(run, ordinal, run_count);
        out.push_str(&count_table(run));
        for suite in &run.test_suites {
            out.push_str(&self.render_suite(suite));
        }
        out
    }

    /// Render a suite depth-first: child suites, then its own cases
    pub fn render_suite(&mut self, suite: &TestSuite) -> String {
        let mut out = String::new();
        for child in &suite.test_suites {
            out.push_str(&self.render_suite(child));
        }
        for case in &suite.test_cases {
            out.push_str(&self.render_case(case));
        }
        out
    }

    /// Render a single test case foldout and emit its annotations
    pub fn render_case(&mut self, case: &TestCase) -> String {
        self.annotate(case);

        let mut body = String::from("\n\n");
        let mut has_failure_block = false;
        if let Some(failure) = &case.failure {
            body.push_str("```error\n");
            let message = failure.message.trim();
            if !message.is_empty() {
                body.push_str(&format!("{message}\n"));
            }
            let stack_trace = failure.stack_trace.trim();
            if !stack_trace.is_empty() {
                body.push_str(&format!("{stack_trace}\n"));
            }
            body.push_str("```\n");
            has_failure_block = true;
        }

        let log = sanitize_log(&case.output);
        if !log.is_empty() {
            if has_failure_block {
                body.push_str("\n---\n");
            }
            body.push_str(&format!("```log\n{}\n```\n", log.join("\n")));
        }

        let passed = case.passed();
        let summary = format!(
            "{} {} ({}s)",
            status_icon(passed),
            escape_html(&case.full_name),
            case.duration
        );
        foldout_section(&summary, &body, !passed)
    }

    /// Emit an error annotation for every failed-test UTP event of a case
    fn annotate(&mut self, case: &TestCase) {
        let events = match parse_utp(&case.output) {
            Ok(events) => events,
            Err(e) => {
                self.console.error(
                    &format!("Failed to read test output of {}: {e}", case.full_name),
                    None,
                );
                return;
            }
        };
        for event in &events {
            debug!(test = %case.full_name, ?event, "utp event");
            if !event.is_failure() {
                continue;
            }
            let location = SourceLocation {
                file: self.paths.resolve(&event.file_name),
                line: event.line_number,
            };
            self.console.error(&event.message, Some(&location));
        }
    }
}

/// The per-run heading, e.g. `## ❌ PlayMode Test (Run 2 of 3) Failed`
#[must_use]
pub fn run_heading(run: &TestRun, ordinal: usize, run_count: usize) -> String {
    let outcome = run.outcome();
    let icon = status_icon(run.passed());
    let mode = match run.test_mode() {
        Ok(mode) => mode,
        Err(e) => {
            debug!(error = %e, "no test mode label");
            ""
        }
    };
    let mode = if mode.is_empty() {
        String::new()
    } else {
        format!("{mode} ")
    };
    if run_count > 1 {
        format!("## {icon} {mode}Test (Run {ordinal} of {run_count}) {outcome}\n")
    } else {
        format!("## {icon} {mode}Test Run {outcome}\n")
    }
}

/// The table of counts below a run heading
///
/// Asserts, skipped and inconclusive rows only appear when non-zero.
#[must_use]
pub fn count_table(run: &TestRun) -> String {
    let mut table = format!("\n| {} | Total Tests Run |\n|---|---|\n", run.total);
    table.push_str(&format!("|🕑| {} |\n", run.duration));
    table.push_str(&format!("|✅| {} passed |\n", run.passed));
    table.push_str(&format!("|❌| {} failed |\n", run.failed));
    if run.asserts > 0 {
        table.push_str(&format!("|🚩| {} asserts |\n", run.asserts));
    }
    if run.skipped > 0 {
        table.push_str(&format!("|⏭️| {} skipped |\n", run.skipped));
    }
    if run.inconclusive > 0 {
        table.push_str(&format!("|❔| {} inconclusive |\n", run.inconclusive));
    }
    table.push('\n');
    table
}
