// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report destinations
//!
//! A report is accumulated fragment by fragment and written out once.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Accumulates markdown and writes it to its destination
pub trait ReportSink {
    /// Append a markdown fragment
    fn append(&mut self, markdown: &str);

    /// Write everything appended so far
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the destination cannot be written.
    fn flush(&mut self) -> std::io::Result<()>;
}

/// The GitHub Actions job summary
///
/// On flush the buffer is appended to the summary file (other steps may
/// already have written to it), or printed to standard output when no file
/// is configured.
#[derive(Debug, Default)]
pub struct StepSummary {
    path: Option<PathBuf>,
    buffer: String,
}

impl StepSummary {
    /// Create a summary writing to `path`, or stdout for `None`
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            buffer: String::new(),
        }
    }

    /// The destination file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ReportSink for StepSummary {
    fn append(&mut self, markdown: &str) {
        self.buffer.push_str(markdown);
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &self.path {
            Some(path) => {
                debug!(path = %path.display(), bytes = self.buffer.len(), "appending summary");
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(self.buffer.as_bytes())?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(self.buffer.as_bytes())?;
                stdout.flush()?;
            }
        }
        self.buffer.clear();
        Ok(())
    }
}

/// In-memory report, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MarkdownBuffer {
    pending: String,
    written: String,
}

impl MarkdownBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything flushed so far
    #[must_use]
    pub fn written(&self) -> &str {
        &self.written
    }

    /// Fragments appended since the last flush
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

impl ReportSink for MarkdownBuffer {
    fn append(&mut self, markdown: &str) {
        self.pending.push_str(markdown);
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.written.push_str(&self.pending);
        self.pending.clear();
        Ok(())
    }
}
