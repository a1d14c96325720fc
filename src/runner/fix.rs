//! Auto-fix sequence.
//!
//! Strictly ordered, never parallel: both steps rewrite working-tree files.
//! Biome is blocking; a stylelint failure (unmatched patterns, unfixable
//! issues) must not abort the fix run, so it is tagged advisory.

use crate::error::{ForgeError, Result};
use crate::runner::checks::STYLE_PATTERNS;
use crate::runner::invocation::ToolInvocation;
use crate::runner::task::{Severity, Task, TaskStatus};
use crate::toolkit::Toolkit;
use colored::*;
use std::path::Path;

/// Build the ordered fix sequence for a project
pub fn fix_tasks(project_root: &Path, toolkit: &Toolkit) -> Vec<Task> {
    vec![
        Task::run(
            "biome",
            Severity::Blocking,
            ToolInvocation::new(toolkit.tool_bin("biome"), project_root)
                .arg("check")
                .arg("--write")
                .arg("."),
        ),
        Task::run(
            "stylelint",
            Severity::Advisory,
            ToolInvocation::new(toolkit.tool_bin("stylelint"), project_root)
                .args(STYLE_PATTERNS)
                .arg("--fix"),
        ),
    ]
}

/// Run auto-fix: biome rewrite, then stylelint `--fix`.
/// Fails iff the blocking biome step failed.
pub async fn run_fix(project_root: &Path, toolkit: &Toolkit) -> Result<()> {
    println!("{}", "Running auto-fix...".cyan().bold());
    log::info!("Running fix in {}", project_root.display());

    let tasks = fix_tasks(project_root, toolkit);
    let report = crate::runner::run_tasks(&tasks, crate::runner::RunPolicy::Sequential).await;

    match report.failures.into_iter().next() {
        None => Ok(()),
        Some(outcome) => {
            let detail = match outcome.status {
                TaskStatus::Failed(detail) => detail,
                _ => "unknown failure".to_string(),
            };
            Err(ForgeError::Tool {
                name: outcome.label,
                detail,
            })
        }
    }
}
