// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for summary runs over real result files


use nunit_summary::config::Config;
use nunit_summary::console::{GithubConsole, RecordingConsole};
use nunit_summary::run;
use nunit_summary::summary::{MarkdownBuffer, StepSummary};
use similar_asserts::assert_eq;
use test_utils::TempTestDir;

fn config(patterns: &str) -> Config {
    Config {
        test_results: patterns.into(),
        ..Default::default()
    }
}

fn artifacts(name: &str) -> TempTestDir {
    let dir = TempTestDir::new(name);
    dir.copy_fixture("EditMode-results.xml", "artifacts/EditMode-results.xml");
    dir.copy_fixture("PlayMode-results.xml", "artifacts/PlayMode-results.xml");
    dir
}

#[test]
fn test_full_report_for_two_runs() {
    let dir = artifacts("full-report");
    let mut console = RecordingConsole::new();
    let mut sink = MarkdownBuffer::new();

    let stats = run(
        &config("artifacts/*-results.xml"),
        dir.path(),
        &mut console,
        &mut sink,
    )
    .expect("run should succeed");
    assert_eq!(stats.runs, 2);

    let report = sink.written();
    assert!(report.starts_with("# Test Results Summary\n\n## ✅ EditMode Test (Run 1 of 2) Passed\n"));
    assert!(report.contains("## ❌ PlayMode Test (Run 2 of 2) Failed\n"));

    // play mode counts, including the optional rows
    assert!(report.contains("\n| 4 | Total Tests Run |\n|---|---|\n"));
    assert!(report.contains("|🚩| 3 asserts |\n|⏭️| 1 skipped |\n\n"));
    assert!(!report.contains("inconclusive"));

    // passing edit mode cases are collapsed, in tree order
    let adds = report.find("✅ Game.Tests.InventoryTests.AddsItem").expect("AddsItem");
    let removes = report
        .find("✅ Game.Tests.InventoryTests.RemovesItem")
        .expect("RemovesItem");
    assert!(adds < removes);
}

#[test]
fn test_failed_case_foldout() {
    let dir = artifacts("failed-foldout");
    let mut sink = MarkdownBuffer::new();
    run(
        &config("artifacts/PlayMode-results.xml"),
        dir.path(),
        &mut RecordingConsole::new(),
        &mut sink,
    )
    .expect("run should succeed");

    let report = sink.written();
    let start = report
        .find("<details open>\n<summary>❌ Game.PlayTests.PlayerTests.TakesDamage")
        .expect("failed case is expanded");
    let foldout = &report[start..];
    let foldout = &foldout[..foldout.find("</details>").expect("closed foldout")];

    assert!(foldout.contains("```error\nExpected: 90\n  But was:  100\n"));
    assert!(foldout.contains("\n---\n```log\nSpawning player at (0, 0, 0)\nApplying 10 damage\n```\n"));
    assert!(!foldout.contains("##utp:"));
    assert!(!foldout.contains("u001b"));
}

#[test]
fn test_noise_only_output_has_no_log_block() {
    let dir = artifacts("noise-only");
    let mut sink = MarkdownBuffer::new();
    run(
        &config("artifacts/PlayMode-results.xml"),
        dir.path(),
        &mut RecordingConsole::new(),
        &mut sink,
    )
    .expect("run should succeed");

    let report = sink.written();
    let start = report
        .find("<summary>✅ Game.PlayTests.PlayerTests.Jumps")
        .expect("passing case");
    let foldout = &report[start..];
    let foldout = &foldout[..foldout.find("</details>").expect("closed foldout")];
    assert!(!foldout.contains("```log"));
    assert!(!foldout.contains("Saving results to:"));
}

#[test]
fn test_workflow_commands_on_console() {
    let dir = artifacts("workflow-commands");
    dir.create_file("artifacts/Broken-results.txt", "not xml");
    let mut console = GithubConsole::new(Vec::new());
    let mut sink = MarkdownBuffer::new();

    let config = Config {
        test_results: "artifacts/*\n!artifacts/EditMode-results.xml".into(),
        project_path: Some(format!("{}/Game", dir.path().display())),
        workspace: Some(format!("{}/", dir.path().display())),
        ..Default::default()
    };
    let stats = run(&config, dir.path(), &mut console, &mut sink).expect("run should succeed");
    assert_eq!(stats.files_found, 2);
    assert_eq!(stats.skipped_files, 1);

    let out = String::from_utf8(console.into_inner()).expect("utf8");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Gathering Test Results...");
    assert!(lines.iter().any(|l| l.starts_with("::error::") && l.ends_with("is not an xml file.")));
    assert!(lines.contains(
        &"::error file=Game/Assets/Tests/PlayerTests.cs,line=27::  Expected: 90%0A  But was:  100%0A"
    ));
}

#[test]
fn test_no_files_leaves_summary_untouched() {
    let dir = TempTestDir::new("no-files");
    let summary = dir.create_file("summary.md", "previous step\n");
    let mut console = RecordingConsole::new();
    let mut sink = StepSummary::new(Some(summary));

    let stats = run(&config("**/*-results.xml"), dir.path(), &mut console, &mut sink)
        .expect("run should succeed");
    assert_eq!(stats.files_found, 0);
    assert_eq!(console.warnings(), vec!["No test result files found!"]);
    assert_eq!(dir.read_file("summary.md"), "previous step\n");
}

#[test]
fn test_report_is_appended_to_step_summary() {
    let dir = artifacts("append-summary");
    let summary = dir.create_file("summary.md", "previous step\n");
    let mut sink = StepSummary::new(Some(summary));

    run(
        &config("artifacts/EditMode-results.xml"),
        dir.path(),
        &mut RecordingConsole::new(),
        &mut sink,
    )
    .expect("run should succeed");

    let contents = dir.read_file("summary.md");
    assert!(contents.starts_with("previous step\n# Test Results Summary\n\n## ✅ EditMode Test Run Passed\n"));
}

#[test]
fn test_all_files_invalid_still_writes_heading() {
    let dir = TempTestDir::new("all-invalid");
    dir.copy_fixture("Truncated-results.xml", "Truncated-results.xml");
    let mut console = RecordingConsole::new();
    let mut sink = MarkdownBuffer::new();

    let stats = run(&config("*.xml"), dir.path(), &mut console, &mut sink)
        .expect("run should succeed");
    assert_eq!(stats.runs, 0);
    assert_eq!(stats.skipped_files, 1);
    assert_eq!(console.errors().len(), 1);
    assert_eq!(sink.written(), "# Test Results Summary\n\n");
}

#[test]
fn test_unwritable_summary_is_fatal() {
    let dir = artifacts("unwritable");
    let mut sink = StepSummary::new(Some(dir.path().join("missing/dir/summary.md")));
    let result = run(
        &config("artifacts/EditMode-results.xml"),
        dir.path(),
        &mut RecordingConsole::new(),
        &mut sink,
    );
    assert!(matches!(
        result,
        Err(nunit_summary::SummaryError::Report(_))
    ));
}
