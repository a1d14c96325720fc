//! Git hook installation via lefthook.
//!
//! Hook installation is best-effort: a missing .git directory or a failed
//! `lefthook install` leaves init successful. The user gets a warning and
//! can install hooks manually later.

use crate::runner::invocation::ToolInvocation;
use crate::toolkit::Toolkit;
use colored::*;
use std::path::Path;

/// Install git hooks with `lefthook install`. Never fails the caller.
pub async fn install_hooks(project_root: &Path, toolkit: &Toolkit) {
    println!("\n{}", "Installing git hooks...".cyan());

    if !project_root.join(".git").is_dir() {
        println!(
            "   {} no .git directory found, skipping hook installation",
            "warn:".yellow()
        );
        println!("   Run \"git init\" first, then run \"forge init\" again.");
        log::warn!("No .git directory in {}", project_root.display());
        return;
    }

    let invocation =
        ToolInvocation::new(toolkit.tool_bin("lefthook"), project_root).arg("install");

    match invocation.run().await {
        Ok(()) => {
            println!("   {} git hooks installed", "ok:".green());
        }
        Err(e) => {
            println!("   {} hook installation failed: {}", "warn:".yellow(), e);
            println!("   You may need to run \"lefthook install\" manually.");
            log::warn!("lefthook install failed: {}", e);
        }
    }
}
