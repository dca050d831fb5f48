// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nunit-summary: Markdown job summaries from NUnit test results
//!
//! Reads the result files matched by the `test-results` input, appends a
//! report to the GitHub step summary and annotates failed assertions.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use nunit_summary::SummaryError;
use nunit_summary::config::Config;
use nunit_summary::console::{Console, GithubConsole};
use nunit_summary::summary::StepSummary;

fn main() -> ExitCode {
    let config = Config::parse();

    // Diagnostics go to stderr; stdout is reserved for workflow commands
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut console = GithubConsole::stdout();
    match summarize(&config, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&format!("{e:#}"), None);
            ExitCode::FAILURE
        }
    }
}

fn summarize(config: &Config, console: &mut dyn Console) -> anyhow::Result<()> {
    let root = std::env::current_dir()
        .map_err(SummaryError::from)
        .context("Failed to determine working directory")?;
    debug!(root = %root.display(), ?config, "starting summary");

    let mut sink = StepSummary::new(config.summary.clone());
    let stats = nunit_summary::run(config, &root, console, &mut sink)
        .context("Failed to summarize test results")?;
    debug!(?stats, "finished");
    Ok(())
}
