// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Captured output sanitizing

use std::sync::LazyLock;

use regex::Regex;

use crate::utp::UTP_MARKER;

/// Notice the runner prints after every run; never useful in a report
pub const NOISE_PREFIX: &str = "Saving results to:";

// Both raw ESC sequences and the `\u001b` spelling left behind by JSON escaping
static ANSI_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\x1b|\\u001b)\[[0-9;]*m").expect("valid ansi regex"));

/// Turn captured test output into readable log lines
///
/// UTP lines, blank lines and the results notice are dropped, color codes
/// are removed and every line is trimmed. Order is preserved.
#[must_use]
pub fn sanitize_log(output: &str) -> Vec<String> {
    output
        .split('\n')
        .filter(|line| !line.contains(UTP_MARKER))
        .map(|line| ANSI_COLOR.replace_all(line, "").trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with(NOISE_PREFIX))
        .collect()
}
