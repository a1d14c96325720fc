//! Single external-tool invocations.
//!
//! Every check, fix, and hook operation ultimately runs one child process.
//! The child inherits stdio so tool diagnostics stream live to the user;
//! nothing is buffered or parsed. Exit status zero is the whole contract.

use crate::error::{ForgeError, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// One external-tool call: program, arguments, working directory.
/// Immutable once built; constructed per invocation and discarded after.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<String>,
    cwd: PathBuf,
}

impl ToolInvocation {
    /// Create an invocation of `program` run from `cwd`
    pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program path
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The argument list
    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    /// Display name of the tool (program basename)
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    /// Run the tool to completion with inherited stdio.
    /// Succeeds iff the child exits with status zero.
    pub async fn run(&self) -> Result<()> {
        let name = self.tool_name();
        println!("\n{} {}...", "Running".cyan(), name.bold());
        log::info!(
            "Invoking {} {:?} in {}",
            self.program.display(),
            self.args,
            self.cwd.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ForgeError::Tool {
                name: name.clone(),
                detail: e.to_string(),
            })?;

        if status.success() {
            println!("{} {} completed", "ok:".green(), name);
            Ok(())
        } else {
            println!("{} {} failed", "error:".red(), name);
            Err(ForgeError::Tool {
                name,
                detail: match status.code() {
                    Some(code) => format!("exit status {}", code),
                    None => "terminated by signal".to_string(),
                },
            })
        }
    }
}
