// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for nunit-summary

use thiserror::Error;

use crate::discovery::DiscoveryError;

/// Errors that abort a summary run
///
/// Problems with individual result files are not represented here; those are
/// reported to the console and the file is skipped.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The result file pattern could not be resolved
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// The report could not be written
    #[error("Failed to write summary: {0}")]
    Report(#[source] std::io::Error),

    /// The working directory could not be determined
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
