// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nunit-summary library
//!
//! Turns NUnit result files into a GitHub Actions job summary with
//! foldouts per test and error annotations for failed assertions. The
//! binary is a thin wrapper around [`run::run`]; everything is exported
//! here for integration tests and embedding.

pub mod annotate;
pub mod config;
pub mod console;
pub mod discovery;
pub mod error;
pub mod report;
pub mod run;
pub mod summary;

pub use error::SummaryError;
pub use run::{RunStats, run};
