//! CLI command definitions using clap.
//!
//! Subcommands:
//! - init: generate configs and install git hooks
//! - check: run the full check set
//! - fix: apply auto-fixes
//! - staged: check staged files (invoked from the pre-commit hook)

use clap::{Parser, Subcommand};
use forge::runner::StagedTool;
use std::path::PathBuf;

/// forge - zero-config developer toolkit for modern projects
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize forge in your project (generates configs and sets up git hooks)
    Init {
        /// Skip lefthook installation
        #[arg(long)]
        skip_hooks: bool,
    },

    /// Run all checks (biome, stylelint, knip, npmPkgJsonLint)
    Check {
        /// Run checks sequentially instead of in parallel
        #[arg(long)]
        no_parallel: bool,
    },

    /// Auto-fix issues (biome and stylelint)
    Fix,

    /// Check staged files with one tool (used by the pre-commit hook)
    Staged {
        /// Which tool to run
        #[arg(value_enum)]
        tool: StagedTool,

        /// Staged file paths to check
        files: Vec<PathBuf>,
    },
}
