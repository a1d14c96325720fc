//! Uniform task descriptors for the orchestrator.
//!
//! Every check and fix step is the same shape: a label, a severity, and
//! either a tool invocation to run or a skip with a reason. Applicability
//! predicates are evaluated when the task list is built, so the runner
//! iterates descriptors generically with no per-tool branching.

use crate::runner::invocation::ToolInvocation;
use colored::*;

/// Failure policy for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Failure fails the enclosing batch
    Blocking,
    /// Failure is logged and swallowed
    Advisory,
}

/// What a task does when executed
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Invoke the tool
    Run(ToolInvocation),
    /// Inapplicable; no-op successfully with a notice
    Skip(String),
}

/// A named unit of work in a check or fix batch
#[derive(Debug, Clone)]
pub struct Task {
    label: String,
    severity: Severity,
    kind: TaskKind,
}

/// Terminal state of one executed task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Passed,
    Skipped,
    Failed(String),
}

/// Result of one task, labeled for reporting
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub label: String,
    pub severity: Severity,
    pub status: TaskStatus,
}

impl TaskOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, TaskStatus::Failed(_))
    }
}

/// Aggregate of a settled task batch.
/// `failures` is empty iff the batch as a whole succeeded.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub total: usize,
    pub failures: Vec<TaskOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Task {
    /// A task that invokes a tool
    pub fn run(label: impl Into<String>, severity: Severity, invocation: ToolInvocation) -> Self {
        Self {
            label: label.into(),
            severity,
            kind: TaskKind::Run(invocation),
        }
    }

    /// A task found inapplicable at build time
    pub fn skip(label: impl Into<String>, severity: Severity, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            severity,
            kind: TaskKind::Skip(reason.into()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_skip(&self) -> bool {
        matches!(self.kind, TaskKind::Skip(_))
    }

    /// Execute the task to a settled outcome. Skips succeed; run failures
    /// are captured in the outcome, never propagated from here.
    pub async fn execute(&self) -> TaskOutcome {
        let status = match &self.kind {
            TaskKind::Skip(reason) => {
                println!("{} {} skipped ({})", "note:".dimmed(), self.label, reason);
                log::info!("Task {} skipped: {}", self.label, reason);
                TaskStatus::Skipped
            }
            TaskKind::Run(invocation) => match invocation.run().await {
                Ok(()) => TaskStatus::Passed,
                Err(e) => TaskStatus::Failed(e.to_string()),
            },
        };

        TaskOutcome {
            label: self.label.clone(),
            severity: self.severity,
            status,
        }
    }
}
