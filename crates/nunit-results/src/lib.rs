// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nunit-results: NUnit result parsing for nunit-summary
//!
//! This library crate reads NUnit 3 XML result files (as written by the Unity
//! test runner) into a normalized tree, and decodes the Unity Test Protocol
//! lines embedded in each test's captured output.
//!
//! # Example
//!
//! ```no_run
//! use nunit_results::{parse_test_results, parse_utp, sanitize_log};
//!
//! let run = parse_test_results("EditMode-results.xml").unwrap();
//! for case in run.failing_cases() {
//!     let events = parse_utp(&case.output).unwrap();
//!     let log = sanitize_log(&case.output);
//!     println!("{}: {} events, {} log lines", case.full_name, events.len(), log.len());
//! }
//! ```

mod de;

pub mod error;
pub mod logs;
pub mod model;
pub mod parser;
pub mod utp;
pub mod xml;

pub use error::{LookupError, ResultsError};
pub use logs::sanitize_log;
pub use model::{Failure, Properties, Property, TestCase, TestRun, TestSuite};
pub use parser::{parse_test_results, parse_test_run};
pub use utp::{UtpEvent, parse_utp};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{LookupError, ResultsError};
    pub use crate::logs::sanitize_log;
    pub use crate::model::{TestCase, TestRun, TestSuite};
    pub use crate::parser::{parse_test_results, parse_test_run};
    pub use crate::utp::{UtpEvent, parse_utp};
}
