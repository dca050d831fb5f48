// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for nunit-summary
//!
//! Every option can be given on the command line or through the environment
//! variables GitHub Actions provides to a step.

use std::path::PathBuf;

use clap::Parser;

use crate::annotate::AnnotationPaths;

/// NUnit Summary - Markdown job summaries from Unity test results
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nunit-summary")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Glob pattern(s) locating the result files
    ///
    /// One pattern per line. Lines starting with `!` exclude matches and
    /// lines starting with `#` are ignored.
    #[arg(short = 'r', long, env = "INPUT_TEST-RESULTS", default_value = "")]
    pub test_results: String,

    /// File the markdown summary is appended to
    ///
    /// Defaults to standard output when unset.
    #[arg(short, long, env = "GITHUB_STEP_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Path of the Unity project the tests ran in
    ///
    /// Used to turn file names reported by the test runner into
    /// repository-relative paths for annotations.
    #[arg(long, env = "UNITY_PROJECT_PATH")]
    pub project_path: Option<String>,

    /// Checkout directory of the repository
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Paths used to resolve annotation file names; unset values are empty
    #[must_use]
    pub fn annotation_paths(&self) -> AnnotationPaths {
        AnnotationPaths::new(
            self.project_path.clone().unwrap_or_default(),
            self.workspace.clone().unwrap_or_default(),
        )
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.test_results.is_empty());
        assert!(config.summary.is_none());
        assert!(config.project_path.is_none());
        assert!(config.workspace.is_none());
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_annotation_paths_default_to_empty() {
        let paths = Config::default().annotation_paths();
        assert_eq!(paths.project_path(), "");
        assert_eq!(paths.workspace(), "");
    }

    #[test]
    fn test_annotation_paths_custom() {
        let config = Config {
            project_path: Some("/github/workspace/Game".into()),
            workspace: Some("/github/workspace".into()),
            ..Default::default()
        };
        let paths = config.annotation_paths();
        assert_eq!(paths.project_path(), "/github/workspace/Game");
        assert_eq!(paths.workspace(), "/github/workspace");
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
