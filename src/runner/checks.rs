//! The fixed check-task set and its applicability gates.
//!
//! Declared order: biome (always), stylelint (only when style files exist),
//! knip (always), npmPkgJsonLint (only when a package.json exists). A gated
//! tool that does not apply becomes a skip task, which is a success.

use crate::error::{ForgeError, Result};
use crate::runner::invocation::ToolInvocation;
use crate::runner::task::{Severity, Task};
use crate::toolkit::Toolkit;
use colored::*;
use std::path::Path;

/// Glob patterns the style-linter operates on
pub const STYLE_PATTERNS: [&str; 3] = ["**/*.css", "**/*.scss", "**/*.sass"];

/// Batch execution policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPolicy {
    /// Launch everything, settle everything, aggregate failures
    Parallel,
    /// Declared order, stop at the first blocking failure
    Sequential,
}

/// True if any style-sheet file exists under the project root
pub fn has_style_files(project_root: &Path) -> bool {
    STYLE_PATTERNS.iter().any(|pattern| {
        let full = project_root.join(pattern);
        glob::glob(&full.to_string_lossy())
            .map(|entries| entries.filter_map(|e| e.ok()).any(|p| p.is_file()))
            .unwrap_or(false)
    })
}

/// Build the fixed ordered check set for a project
pub fn check_tasks(project_root: &Path, toolkit: &Toolkit) -> Vec<Task> {
    let biome = Task::run(
        "biome",
        Severity::Blocking,
        ToolInvocation::new(toolkit.tool_bin("biome"), project_root)
            .arg("check")
            .arg("."),
    );

    let stylelint = if has_style_files(project_root) {
        Task::run(
            "stylelint",
            Severity::Blocking,
            ToolInvocation::new(toolkit.tool_bin("stylelint"), project_root).args(STYLE_PATTERNS),
        )
    } else {
        Task::skip("stylelint", Severity::Blocking, "no style files found")
    };

    let knip = Task::run(
        "knip",
        Severity::Blocking,
        ToolInvocation::new(toolkit.tool_bin("knip"), project_root),
    );

    let pkg_lint = if project_root.join("package.json").is_file() {
        Task::run(
            "npmPkgJsonLint",
            Severity::Blocking,
            ToolInvocation::new(toolkit.tool_bin("npmPkgJsonLint"), project_root).arg("."),
        )
    } else {
        Task::skip(
            "npmPkgJsonLint",
            Severity::Blocking,
            "no package.json found",
        )
    };

    vec![biome, stylelint, knip, pkg_lint]
}

/// Run the full check set, failing with the aggregate count if any
/// blocking task failed.
pub async fn run_checks(project_root: &Path, toolkit: &Toolkit, policy: RunPolicy) -> Result<()> {
    println!("{}", "Running checks...".cyan().bold());
    log::info!("Running checks in {} ({:?})", project_root.display(), policy);

    let tasks = check_tasks(project_root, toolkit);
    let report = crate::runner::run_tasks(&tasks, policy).await;

    if report.passed() {
        Ok(())
    } else {
        Err(ForgeError::ChecksFailed(report.failures.len()))
    }
}
