// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types
//!
//! These mirror the NUnit 3 result schema after normalization: every
//! collection field is a `Vec`, leaf attributes are plain strings and counts.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::de;
use crate::error::LookupError;

/// Result label of a passing run, suite or case
pub const PASSED: &str = "Passed";

static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid qualifier regex"));

/// Strip parenthetical qualifiers from a result label
///
/// NUnit reports e.g. `Failed(Child)` when a run failed because of a child
/// suite.
#[must_use]
pub fn strip_qualifier(label: &str) -> String {
    QUALIFIER.replace_all(label, "").into_owned()
}

/// One parsed result file (`<test-run>`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRun {
    /// Run identifier
    #[serde(deserialize_with = "de::text")]
    pub id: String,
    /// Overall result label, possibly qualified (`Failed(Child)`)
    #[serde(deserialize_with = "de::text")]
    pub result: String,
    /// Duration in seconds, as written by the engine
    #[serde(deserialize_with = "de::text")]
    pub duration: String,
    /// Total tests run
    #[serde(deserialize_with = "de::count")]
    pub total: u64,
    /// Tests passed
    #[serde(deserialize_with = "de::count")]
    pub passed: u64,
    /// Tests failed
    #[serde(deserialize_with = "de::count")]
    pub failed: u64,
    /// Tests with an inconclusive outcome
    #[serde(deserialize_with = "de::count")]
    pub inconclusive: u64,
    /// Tests skipped
    #[serde(deserialize_with = "de::count")]
    pub skipped: u64,
    /// Assertions evaluated
    #[serde(deserialize_with = "de::count")]
    pub asserts: u64,
    /// Test engine version
    #[serde(rename = "engine-version", deserialize_with = "de::text")]
    pub engine_version: String,
    /// Start timestamp
    #[serde(rename = "start-time", deserialize_with = "de::text")]
    pub start_time: String,
    /// End timestamp
    #[serde(rename = "end-time", deserialize_with = "de::text")]
    pub end_time: String,
    /// Root suites; NUnit writes exactly one, but the tree allows several
    #[serde(rename = "test-suite", deserialize_with = "de::records")]
    pub test_suites: Vec<TestSuite>,
}

impl TestRun {
    /// The result label without its parenthetical qualifier
    #[must_use]
    pub fn outcome(&self) -> String {
        strip_qualifier(&self.result)
    }

    /// Check if the run as a whole passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome() == PASSED
    }

    /// The root suite, if the run has one
    #[must_use]
    pub fn root_suite(&self) -> Option<&TestSuite> {
        self.test_suites.first()
    }

    /// Look up the test mode label (e.g. `EditMode` or `PlayMode`)
    ///
    /// The label is the value of the first property in the root suite's
    /// property bag.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` naming the first missing link.
    pub fn test_mode(&self) -> Result<&str, LookupError> {
        let suite = self.root_suite().ok_or(LookupError::NoRootSuite)?;
        let properties = suite.properties.as_ref().ok_or(LookupError::NoProperties)?;
        properties
            .property
            .first()
            .map(|p| p.value.as_str())
            .ok_or(LookupError::NoPropertyEntries)
    }

    /// All test cases in depth-first order (child suites before own cases)
    #[must_use]
    pub fn test_cases(&self) -> Vec<&TestCase> {
        let mut cases = Vec::new();
        for suite in &self.test_suites {
            suite.collect_cases(&mut cases);
        }
        cases
    }

    /// Get failing test cases
    #[must_use]
    pub fn failing_cases(&self) -> Vec<&TestCase> {
        self.test_cases()
            .into_iter()
            .filter(|c| !c.passed())
            .collect()
    }
}

/// A grouping node (`<test-suite>`): assembly, namespace, fixture, ...
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSuite {
    /// Suite kind (`Assembly`, `TestSuite`, `TestFixture`, ...)
    #[serde(rename = "type", deserialize_with = "de::text")]
    pub kind: String,
    /// Short name
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Fully qualified name
    #[serde(rename = "fullname", deserialize_with = "de::text")]
    pub full_name: String,
    /// Result label
    #[serde(deserialize_with = "de::text")]
    pub result: String,
    /// Duration in seconds
    #[serde(deserialize_with = "de::text")]
    pub duration: String,
    /// Tests below this suite
    #[serde(deserialize_with = "de::count")]
    pub total: u64,
    /// Tests passed below this suite
    #[serde(deserialize_with = "de::count")]
    pub passed: u64,
    /// Tests failed below this suite
    #[serde(deserialize_with = "de::count")]
    pub failed: u64,
    /// Property bag
    #[serde(deserialize_with = "de::record")]
    pub properties: Option<Properties>,
    /// Child suites, in document order
    #[serde(rename = "test-suite", deserialize_with = "de::records")]
    pub test_suites: Vec<TestSuite>,
    /// Own test cases, in document order
    #[serde(rename = "test-case", deserialize_with = "de::records")]
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    fn collect_cases<'a>(&'a self, cases: &mut Vec<&'a TestCase>) {
        for suite in &self.test_suites {
            suite.collect_cases(cases);
        }
        cases.extend(self.test_cases.iter());
    }
}

/// A suite's `<properties>` element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    /// Property entries, in document order
    #[serde(deserialize_with = "de::records")]
    pub property: Vec<Property>,
}

/// A single `<property name=".." value=".."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Property name
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Property value
    #[serde(deserialize_with = "de::text")]
    pub value: String,
}

/// A leaf test (`<test-case>`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCase {
    /// Short name
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Fully qualified name
    #[serde(rename = "fullname", deserialize_with = "de::text")]
    pub full_name: String,
    /// Result label
    #[serde(deserialize_with = "de::text")]
    pub result: String,
    /// Duration in seconds
    #[serde(deserialize_with = "de::text")]
    pub duration: String,
    /// Assertions evaluated
    #[serde(deserialize_with = "de::count")]
    pub asserts: u64,
    /// Failure details, for failed cases
    #[serde(deserialize_with = "de::record")]
    pub failure: Option<Failure>,
    /// Captured output, possibly carrying `##utp:` lines
    #[serde(deserialize_with = "de::text")]
    pub output: String,
}

impl TestCase {
    /// Check if the case passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result == PASSED
    }
}

/// Failure details of a test case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Failure {
    /// Assertion message
    #[serde(deserialize_with = "de::text")]
    pub message: String,
    /// Stack trace
    #[serde(rename = "stack-trace", deserialize_with = "de::text")]
    pub stack_trace: String,
}
