// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for nunit-summary
//!
//! These tests use proptest to check the rendering invariants for arbitrary
//! counts and case results, and that console escaping never leaks a line
//! break into a workflow command.

use proptest::prelude::*;

use nunit_results::{TestCase, TestRun};
use nunit_summary::annotate::AnnotationPaths;
use nunit_summary::console::{RecordingConsole, escape_data, escape_property};
use nunit_summary::report::{ReportRenderer, count_table, run_heading};

// ============================================================================
// Strategies
// ============================================================================

/// Counts skewed towards zero so both table shapes show up
fn count() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), 1u64..1000]
}

fn test_run() -> impl Strategy<Value = TestRun> {
    (count(), count(), count(), count(), count(), count()).prop_map(
        |(total, passed, failed, skipped, inconclusive, asserts)| TestRun {
            result: "Passed".into(),
            duration: "1.5".into(),
            total,
            passed,
            failed,
            skipped,
            inconclusive,
            asserts,
            ..Default::default()
        },
    )
}

fn case_result() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Passed".to_string()),
        Just("Failed".to_string()),
        Just("Skipped".to_string()),
        Just("Inconclusive".to_string()),
        Just("passed".to_string()),
        "[A-Za-z()]{0,12}".prop_map(|s| s),
    ]
}

// ============================================================================
// Count table
// ============================================================================

proptest! {
    #[test]
    fn prop_optional_rows_iff_nonzero(run in test_run()) {
        let table = count_table(&run);
        prop_assert_eq!(table.contains("asserts |"), run.asserts > 0);
        prop_assert_eq!(table.contains("skipped |"), run.skipped > 0);
        prop_assert_eq!(table.contains("inconclusive |"), run.inconclusive > 0);
    }

    #[test]
    fn prop_fixed_rows_always_present(run in test_run()) {
        let table = count_table(&run);
        let total_row = format!("| {} | Total Tests Run |", run.total);
        let passed_row = format!("|✅| {} passed |", run.passed);
        let failed_row = format!("|❌| {} failed |", run.failed);
        prop_assert!(table.contains(&total_row));
        prop_assert!(table.contains("|🕑| 1.5 |"));
        prop_assert!(table.contains(&passed_row));
        prop_assert!(table.contains(&failed_row));
        prop_assert!(table.ends_with("|\n\n"));
    }

    #[test]
    fn prop_run_number_only_with_several_runs(ordinal in 1usize..10, extra in 0usize..10) {
        let run = TestRun { result: "Passed".into(), ..Default::default() };
        let run_count = ordinal + extra;
        let heading = run_heading(&run, ordinal, run_count);
        let numbered = format!("(Run {ordinal} of {run_count})");
        prop_assert_eq!(heading.contains(&numbered), run_count > 1);
        prop_assert!(heading.starts_with("## ✅ "));
    }
}

// ============================================================================
// Foldouts
// ============================================================================

proptest! {
    #[test]
    fn prop_expanded_iff_not_passed(result in case_result(), name in "[A-Za-z.<>&]{1,20}") {
        let case = TestCase {
            full_name: name,
            result: result.clone(),
            ..Default::default()
        };
        let mut console = RecordingConsole::new();
        let paths = AnnotationPaths::default();
        let markdown = ReportRenderer::new(&mut console, &paths).render_case(&case);

        prop_assert_eq!(markdown.starts_with("<details open>"), result != "Passed");
        prop_assert!(markdown.ends_with("\n</details>\n"));
        let summary = &markdown[markdown.find("<summary>").expect("summary")..];
        let summary = &summary[..summary.find("</summary>").expect("summary end")];
        prop_assert!(!summary["<summary>".len()..].contains('<'));
    }

    #[test]
    fn prop_log_block_never_shows_protocol_lines(lines in prop::collection::vec("[ -~]{0,30}", 0..8)) {
        let mut output: Vec<String> = lines;
        output.push(r#"##utp:{"type":"TestStatus","phase":"End","state":4}"#.to_string());
        let case = TestCase {
            result: "Passed".into(),
            output: output.join("\n"),
            ..Default::default()
        };
        let mut console = RecordingConsole::new();
        let paths = AnnotationPaths::default();
        let markdown = ReportRenderer::new(&mut console, &paths).render_case(&case);
        prop_assert!(!markdown.contains("##utp:"));
        prop_assert!(console.entries.is_empty());
    }
}

// ============================================================================
// Workflow command escaping
// ============================================================================

proptest! {
    #[test]
    fn prop_escaped_data_is_single_line(value in "(?s).{0,60}") {
        let escaped = escape_data(&value);
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
    }

    #[test]
    fn prop_escaped_property_has_no_separators(value in "(?s).{0,60}") {
        let escaped = escape_property(&value);
        prop_assert!(!escaped.contains(','));
        prop_assert!(!escaped.contains(':'));
        prop_assert!(!escaped.contains('\n'));
    }
}
