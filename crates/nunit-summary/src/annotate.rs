// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Annotation file paths
//!
//! The Unity runner reports failing files relative to the Unity project
//! (`./Assets/Tests/PlayerTests.cs`), while annotations must name a file
//! relative to the repository. The project path is known from the
//! environment, as is the checkout directory, so the repository-relative path
//! is rebuilt with plain string surgery:
//!
//! 1. append `/` to the project path,
//! 2. remove the first occurrence of the workspace path from it,
//! 3. append the reported file name,
//! 4. remove the first `./` or `.\` marker.
//!
//! Nothing checks that the result exists. When the project path is absolute
//! and unrelated to the workspace, or the runner reports an absolute file
//! name, the result is a path GitHub cannot resolve and the annotation is
//! shown without a file link.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static RELATIVE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\./|\.\\").expect("valid marker regex"));

/// Project and workspace paths used to resolve annotation file names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationPaths {
    project_path: String,
    workspace: String,
}

impl AnnotationPaths {
    /// Create from the Unity project path and the repository checkout path
    #[must_use]
    pub fn new(project_path: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            workspace: workspace.into(),
        }
    }

    /// The Unity project path
    #[must_use]
    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    /// The repository checkout path
    #[must_use]
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Resolve a file name reported by the test runner
    #[must_use]
    pub fn resolve(&self, file_name: &str) -> String {
        let project_path = format!("{}/", self.project_path);
        debug!(%project_path, workspace = %self.workspace, "resolving annotation path");
        let relative_project = project_path.replacen(self.workspace.as_str(), "", 1);
        let joined = format!("{relative_project}{file_name}");
        let resolved = RELATIVE_MARKER.replacen(&joined, 1, "").into_owned();
        debug!(%relative_project, file_name, %joined, %resolved, "resolved annotation path");
        resolved
    }
}
