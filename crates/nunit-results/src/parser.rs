// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! NUnit result file parsing
//!
//! Reading a result file takes three steps: decode the XML into a generic
//! tree ([`crate::xml::parse_document`]), normalize its collection fields
//! ([`crate::xml::canonicalize`]), then decode the `test-run` node into a
//! [`TestRun`].
//!
//! # Example
//!
//! ```no_run
//! use nunit_results::parse_test_results;
//!
//! let run = parse_test_results("artifacts/EditMode-results.xml").unwrap();
//! println!("{} of {} tests passed", run.passed, run.total);
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::ResultsError;
use crate::model::TestRun;
use crate::xml::{canonicalize, parse_document};

/// Extension a result file must carry
pub const RESULTS_EXTENSION: &str = ".xml";

/// Read and parse a result file
///
/// # Errors
///
/// Returns `ResultsError::Io` if the file cannot be read,
/// `ResultsError::UnsupportedFormat` if it is not an `.xml` file, and any of
/// the decode errors of [`parse_test_run`].
pub fn parse_test_results(path: impl AsRef<Path>) -> Result<TestRun, ResultsError> {
    let path = path.as_ref();
    let io_error = |source| ResultsError::Io {
        path: path.to_path_buf(),
        source,
    };

    std::fs::metadata(path).map_err(io_error)?;
    if !path.to_string_lossy().ends_with(RESULTS_EXTENSION) {
        return Err(ResultsError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(io_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "read test results");
    parse_test_run(&contents)
}

/// Parse the contents of a result file
///
/// # Errors
///
/// Returns `ResultsError::Xml`/`ResultsError::MalformedXml` for documents the
/// XML reader rejects, `ResultsError::MissingTestRun` if there is no
/// `<test-run>` root, and `ResultsError::JsonParse` if the tree cannot be
/// decoded.
pub fn parse_test_run(xml: &str) -> Result<TestRun, ResultsError> {
    let mut document = parse_document(xml)?;
    canonicalize(&mut document);

    let root = document
        .get_mut("test-run")
        .map(serde_json::Value::take)
        .ok_or(ResultsError::MissingTestRun)?;
    let run = match root {
        serde_json::Value::Object(_) => serde_json::from_value(root)?,
        // `<test-run/>` without attributes
        _ => TestRun::default(),
    };
    Ok(run)
}
