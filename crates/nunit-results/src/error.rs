// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for nunit-results

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading test results or decoding test output
#[derive(Debug, Error)]
pub enum ResultsError {
    /// The input file does not carry the `.xml` extension
    #[error("{} is not an xml file.", path.display())]
    UnsupportedFormat {
        /// Path of the rejected file
        path: PathBuf,
    },

    /// Error reading a test results file
    #[error("Unable to read {}: {source}", path.display())]
    Io {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The XML reader rejected the document
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document is structurally incomplete
    #[error("Malformed XML: {message}")]
    MalformedXml {
        /// Description of the structural problem
        message: String,
    },

    /// The normalized tree did not fit the test result model
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The document has no `<test-run>` root element
    #[error("Missing <test-run> root element")]
    MissingTestRun,

    /// A `##utp:` payload embedded in test output is not valid JSON
    #[error("Invalid UTP payload `{payload}`: {source}")]
    InvalidUtpPayload {
        /// The raw payload text following the marker
        payload: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons the best-effort test mode lookup can come up empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The test run has no root suite
    #[error("test run has no root test-suite")]
    NoRootSuite,

    /// The root suite carries no property bag
    #[error("root test-suite has no properties")]
    NoProperties,

    /// The property bag is present but empty
    #[error("root test-suite properties contain no property entries")]
    NoPropertyEntries,
}
