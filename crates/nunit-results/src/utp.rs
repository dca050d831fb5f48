// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Unity Test Protocol (UTP) extraction
//!
//! The Unity test runner writes structured events into a test's captured
//! output as single lines of the form `##utp:{...json...}`. This module finds
//! those lines and decodes them.
//!
//! # Example
//!
//! ```
//! use nunit_results::utp::parse_utp;
//!
//! let output = r#"##utp:{"type":"TestStatus","phase":"End","state":5,"fileName":"Tests/Foo.cs","lineNumber":42,"message":"boom"}"#;
//! let events = parse_utp(output).unwrap();
//! assert!(events[0].is_failure());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de;
use crate::error::ResultsError;

/// Token that introduces a UTP line
pub const UTP_MARKER: &str = "##utp:";

/// State code the runner reports for a failed test
pub const FAILURE_STATE: i64 = 5;

static UTP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##utp:(\{.*\})").expect("valid utp regex"));

/// Kind of UTP message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    /// Start or end of a single test
    TestStatus,
    /// Tests scheduled for the run
    TestPlan,
    /// Log output emitted while a test ran
    LogEntry,
    /// Any message type this crate does not act on
    #[default]
    #[serde(other)]
    Other,
}

/// Lifecycle phase of a UTP message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Something began
    Begin,
    /// Something finished
    End,
    /// A point-in-time event
    Immediate,
    /// Any phase this crate does not act on
    #[default]
    #[serde(other)]
    Other,
}

/// A decoded `##utp:` event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UtpEvent {
    /// Message type tag
    #[serde(rename = "type", deserialize_with = "de::tag")]
    pub message_type: MessageType,
    /// Phase tag
    #[serde(deserialize_with = "de::tag")]
    pub phase: Phase,
    /// Numeric test state; [`FAILURE_STATE`] marks a failure
    #[serde(deserialize_with = "de::integer")]
    pub state: Option<i64>,
    /// Test name, when reported
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Source file the event points at, relative to the Unity project
    #[serde(deserialize_with = "de::text")]
    pub file_name: String,
    /// Line within `file_name`; zero when missing or negative
    #[serde(deserialize_with = "de::count")]
    pub line_number: u64,
    /// Human readable message
    #[serde(deserialize_with = "de::text")]
    pub message: String,
    /// Duration in milliseconds, on end events
    #[serde(deserialize_with = "de::number")]
    pub duration: Option<f64>,
}

impl UtpEvent {
    /// Check if this event reports a failed test and should be annotated
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.message_type == MessageType::TestStatus
            && self.phase == Phase::End
            && self.state == Some(FAILURE_STATE)
    }
}

/// Decode every `##utp:` line in a block of captured output
///
/// Fields with unexpected shapes decode to their empty values, so only a
/// payload that is not valid JSON stops extraction.
///
/// # Errors
///
/// Returns `ResultsError::InvalidUtpPayload` for the first payload that is
/// not valid JSON; later lines are not inspected.
pub fn parse_utp(output: &str) -> Result<Vec<UtpEvent>, ResultsError> {
    UTP_LINE
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|payload| parse_event(payload.as_str()))
        .collect()
}

/// Decode a single UTP payload (the JSON after the marker)
///
/// # Errors
///
/// Returns `ResultsError::InvalidUtpPayload` if the payload is not valid JSON.
pub fn parse_event(payload: &str) -> Result<UtpEvent, ResultsError> {
    serde_json::from_str::<Value>(payload)
        .and_then(serde_json::from_value)
        .map_err(|source| ResultsError::InvalidUtpPayload {
        payload: payload.to_string(),
        source,
    })
}
