//! Staged-file checks for the pre-commit hook.
//!
//! Lefthook hands us the staged file list; we filter it down to the
//! extensions the tool understands and run the tool against exactly those
//! paths. Nothing staged for the tool is a successful no-op. Failures
//! propagate directly so the commit is blocked.

use crate::error::Result;
use crate::runner::invocation::ToolInvocation;
use crate::toolkit::Toolkit;
use clap::ValueEnum;
use colored::*;
use std::path::{Path, PathBuf};

/// Extensions the formatter/linter handles
pub const FORMATTER_EXTENSIONS: [&str; 6] = ["js", "jsx", "ts", "tsx", "json", "jsonc"];

/// Extensions the style-linter handles
pub const STYLE_EXTENSIONS: [&str; 3] = ["css", "scss", "sass"];

/// Which tool a staged check targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StagedTool {
    /// biome, over source/markup/config files
    Formatter,
    /// stylelint, over stylesheet files
    Styles,
}

impl StagedTool {
    fn extensions(self) -> &'static [&'static str] {
        match self {
            StagedTool::Formatter => &FORMATTER_EXTENSIONS,
            StagedTool::Styles => &STYLE_EXTENSIONS,
        }
    }

    fn bin_name(self) -> &'static str {
        match self {
            StagedTool::Formatter => "biome",
            StagedTool::Styles => "stylelint",
        }
    }
}

/// Keep only paths whose extension is in `extensions`
pub fn filter_by_extension(files: &[PathBuf], extensions: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Check staged files with the given tool. Spawns nothing if no staged file
/// matches the tool's extensions.
pub async fn run_staged(
    tool: StagedTool,
    files: &[PathBuf],
    project_root: &Path,
    toolkit: &Toolkit,
) -> Result<()> {
    let relevant = filter_by_extension(files, tool.extensions());

    if relevant.is_empty() {
        println!(
            "{} no staged files for {}",
            "note:".dimmed(),
            tool.bin_name()
        );
        log::info!("No staged files for {}, skipping", tool.bin_name());
        return Ok(());
    }

    println!(
        "{} {} staged file(s) with {}",
        "Checking".cyan(),
        relevant.len(),
        tool.bin_name()
    );

    let mut invocation = ToolInvocation::new(toolkit.tool_bin(tool.bin_name()), project_root);
    if tool == StagedTool::Formatter {
        invocation = invocation.arg("check");
    }
    invocation
        .args(relevant.iter().map(|p| p.to_string_lossy().into_owned()))
        .run()
        .await
}
