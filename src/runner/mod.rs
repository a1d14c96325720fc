//! Check/fix orchestrator.
//!
//! One task runner drives both batch shapes: parallel with collective
//! settlement and aggregated failures, or sequential with fail-fast on the
//! first blocking failure. Advisory failures never fail a batch; they are
//! logged and swallowed under either policy.

pub mod checks;
pub mod fix;
pub mod invocation;
pub mod staged;
pub mod task;

pub use checks::{RunPolicy, run_checks};
pub use fix::run_fix;
pub use invocation::ToolInvocation;
pub use staged::{StagedTool, run_staged};
pub use task::{CheckReport, Severity, Task, TaskOutcome, TaskStatus};

use colored::*;

/// Run a batch of tasks to a settled report.
///
/// Parallel: all tasks launch concurrently in declared order and every one
/// runs to completion regardless of siblings; no cancellation. Sequential:
/// strict declared order, stopping after the first blocking failure so later
/// tasks never start. `CheckReport.total` counts tasks that actually settled.
pub async fn run_tasks(tasks: &[Task], policy: RunPolicy) -> CheckReport {
    let outcomes = match policy {
        RunPolicy::Parallel => {
            futures::future::join_all(tasks.iter().map(|task| task.execute())).await
        }
        RunPolicy::Sequential => {
            let mut outcomes = Vec::with_capacity(tasks.len());
            for task in tasks {
                let outcome = task.execute().await;
                let stop = outcome.is_failure() && outcome.severity == Severity::Blocking;
                outcomes.push(outcome);
                if stop {
                    break;
                }
            }
            outcomes
        }
    };

    let total = outcomes.len();
    let mut failures = Vec::new();
    for outcome in outcomes {
        if !outcome.is_failure() {
            continue;
        }
        match outcome.severity {
            Severity::Blocking => failures.push(outcome),
            Severity::Advisory => {
                log::warn!("Advisory task {} failed, continuing", outcome.label);
                println!(
                    "{} {} failed (advisory, not fatal)",
                    "note:".yellow(),
                    outcome.label
                );
            }
        }
    }

    CheckReport { total, failures }
}
