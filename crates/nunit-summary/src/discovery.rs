// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Result file discovery
//!
//! Patterns follow the conventions of GitHub Actions inputs: one glob per
//! line, `#` starts a comment, `!` excludes. `*` stays within a directory
//! while `**` crosses directories, and a pattern naming a directory matches
//! every file below it.
//!
//! # Example
//!
//! ```no_run
//! use nunit_summary::discovery::discover_files;
//!
//! let root = std::env::current_dir().unwrap();
//! let files = discover_files("artifacts/**/*-results.xml\n!artifacts/old/**", &root).unwrap();
//! ```

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Discovery errors
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A pattern is not a valid glob
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern line
        pattern: String,
        /// Underlying glob error
        #[source]
        source: globset::Error,
    },
}

/// An include pattern and the deepest directory it can match below
#[derive(Debug, Clone)]
struct Include {
    base: PathBuf,
    matcher: GlobMatcher,
}

/// A parsed set of include and exclude patterns
#[derive(Debug, Clone, Default)]
pub struct FilePatterns {
    includes: Vec<Include>,
    excludes: Vec<GlobMatcher>,
}

fn has_glob_meta(component: &str) -> bool {
    component.contains(['*', '?', '[', '{'])
}

/// A pattern anchored at the discovery root
///
/// `base` is the literal directory prefix, before any glob syntax. `glob`
/// is the full pattern with that prefix escaped, so a root containing `[`
/// or `{` still matches itself.
#[derive(Debug, PartialEq)]
struct Anchored {
    base: PathBuf,
    glob: String,
}

/// Anchor a pattern at `root` and drop `.` components
fn anchor(pattern: &str, root: &Path) -> Anchored {
    let pattern = Path::new(pattern);
    let mut base: PathBuf = if pattern.is_absolute() {
        PathBuf::new()
    } else {
        root.components().collect()
    };
    let mut rest: Vec<String> = Vec::new();
    for component in pattern.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part)
                if rest.is_empty() && !has_glob_meta(&part.to_string_lossy()) =>
            {
                base.push(part);
            }
            other if rest.is_empty() && !matches!(other, Component::Normal(_)) => {
                base.push(other);
            }
            other => rest.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }

    let prefix = globset::escape(&base.to_string_lossy());
    let glob = if rest.is_empty() {
        prefix
    } else if prefix.is_empty() {
        rest.join("/")
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), rest.join("/"))
    };
    Anchored { base, glob }
}

fn compile(glob: &str, line: &str) -> Result<GlobMatcher, DiscoveryError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DiscoveryError::InvalidPattern {
            pattern: line.to_string(),
            source,
        })
}

impl FilePatterns {
    /// Parse newline-separated patterns, anchoring relative ones at `root`
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidPattern` for the first invalid glob.
    pub fn parse(patterns: &str, root: &Path) -> Result<Self, DiscoveryError> {
        let mut parsed = Self::default();
        for line in patterns.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.strip_prefix('!') {
                Some(excluded) => {
                    let pattern = anchor(excluded.trim(), root);
                    parsed.excludes.push(compile(&pattern.glob, line)?);
                }
                None => {
                    let Anchored { base, glob } = anchor(line, root);
                    let matcher = compile(&glob, line)?;
                    parsed.includes.push(Include { base, matcher });
                }
            }
        }
        Ok(parsed)
    }

    /// Check if no include pattern was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes
            .iter()
            .any(|m| path.ancestors().any(|a| m.is_match(a)))
    }

    /// Walk the file system for matching files
    ///
    /// The result is de-duplicated and sorted.
    #[must_use]
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut found = BTreeSet::new();
        for include in &self.includes {
            if !include.base.exists() {
                debug!(base = %include.base.display(), "pattern base does not exist");
                continue;
            }
            for entry in WalkDir::new(&include.base).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!(error = %e, "skipping unreadable entry");
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let matched = path
                    .ancestors()
                    .take_while(|a| a.starts_with(&include.base))
                    .any(|a| include.matcher.is_match(a));
                if matched && !self.is_excluded(path) {
                    found.insert(path.to_path_buf());
                }
            }
        }
        found.into_iter().collect()
    }
}

/// Find the files matching `patterns`, relative to `root`
///
/// # Errors
///
/// Returns `DiscoveryError::InvalidPattern` if a pattern is not a valid glob.
pub fn discover_files(patterns: &str, root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let patterns = FilePatterns::parse(patterns, root)?;
    let files = patterns.discover();
    debug!(count = files.len(), "discovered result files");
    Ok(files)
}
