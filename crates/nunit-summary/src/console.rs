// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Host console output
//!
//! The console is where a CI host picks up progress messages, warnings and
//! failure annotations. [`GithubConsole`] speaks GitHub Actions workflow
//! commands; [`RecordingConsole`] keeps everything in memory.

use std::fmt;
use std::io::Write;

use tracing::warn;

/// A file and line an error annotation points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Repository-relative file path
    pub file: String,
    /// 1-based line number
    pub line: u64,
}

/// One-way sink for progress messages and annotations
pub trait Console {
    /// Print an informational line
    fn info(&mut self, message: &str);

    /// Report a warning
    fn warning(&mut self, message: &str);

    /// Report an error, optionally annotating a source location
    fn error(&mut self, message: &str, location: Option<&SourceLocation>);
}

// ============================================================================
// GitHub Actions workflow commands
// ============================================================================

/// Escape the message part of a workflow command
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Console writing GitHub Actions workflow commands
///
/// Informational lines are written verbatim, warnings and errors as
/// `::warning::` and `::error::` commands.
#[derive(Debug)]
pub struct GithubConsole<W: Write> {
    out: W,
}

impl GithubConsole<std::io::Stdout> {
    /// Console on standard output, where the runner reads commands
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> GithubConsole<W> {
    /// Create a console over any writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "failed to write to console");
        }
    }
}

impl<W: Write> Console for GithubConsole<W> {
    fn info(&mut self, message: &str) {
        self.write_line(format_args!("{message}"));
    }

    fn warning(&mut self, message: &str) {
        self.write_line(format_args!("::warning::{}", escape_data(message)));
    }

    fn error(&mut self, message: &str, location: Option<&SourceLocation>) {
        match location {
            Some(location) => self.write_line(format_args!(
                "::error file={},line={}::{}",
                escape_property(&location.file),
                location.line,
                escape_data(message)
            )),
            None => self.write_line(format_args!("::error::{}", escape_data(message))),
        }
    }
}

// ============================================================================
// In-memory console
// ============================================================================

/// A message received by a [`RecordingConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEntry {
    /// Informational line
    Info(String),
    /// Warning
    Warning(String),
    /// Error, with the annotated location if any
    Error {
        /// Error message
        message: String,
        /// Annotated location
        location: Option<SourceLocation>,
    },
}

/// Console that records every message in order
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    /// Received messages, oldest first
    pub entries: Vec<ConsoleEntry>,
}

impl RecordingConsole {
    /// Create an empty console
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings received so far
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ConsoleEntry::Warning(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Errors received so far, with their locations
    #[must_use]
    pub fn errors(&self) -> Vec<(&str, Option<&SourceLocation>)> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ConsoleEntry::Error { message, location } => {
                    Some((message.as_str(), location.as_ref()))
                }
                _ => None,
            })
            .collect()
    }

    /// Errors that carry a source location
    #[must_use]
    pub fn annotations(&self) -> Vec<(&str, &SourceLocation)> {
        self.errors()
            .into_iter()
            .filter_map(|(message, location)| location.map(|l| (message, l)))
            .collect()
    }
}

impl Console for RecordingConsole {
    fn info(&mut self, message: &str) {
        self.entries.push(ConsoleEntry::Info(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.entries.push(ConsoleEntry::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str, location: Option<&SourceLocation>) {
        self.entries.push(ConsoleEntry::Error {
            message: message.to_string(),
            location: location.cloned(),
        });
    }
}
