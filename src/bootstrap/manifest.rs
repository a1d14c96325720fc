//! package.json "prepare" script maintenance.
//!
//! Future installs re-run `forge init` via the npm prepare lifecycle. The
//! mutation is append-only: an existing prepare command is chained, never
//! replaced, and the file is rewritten only when something changed.

use crate::error::Result;
use colored::*;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

/// Command wired into the prepare lifecycle
pub const PREPARE_COMMAND: &str = "forge init";

/// Outcome of a manifest update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    /// prepare script created
    Added,
    /// existing prepare script chained with the init command
    Appended,
    /// prepare already invokes the init command
    Unchanged,
    /// no package.json at the project root
    Missing,
}

/// Ensure `scripts.prepare` invokes `forge init`, writing the manifest back
/// only when it changed. An absent manifest is a warning, not a failure.
pub fn update_manifest(project_root: &Path) -> Result<ManifestStatus> {
    let manifest_path = project_root.join("package.json");

    if !manifest_path.is_file() {
        println!(
            "   {} no package.json found, skipping prepare script",
            "warn:".yellow()
        );
        log::warn!("No package.json in {}", project_root.display());
        return Ok(ManifestStatus::Missing);
    }

    let raw = fs::read_to_string(&manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&raw)?;

    let scripts = manifest
        .as_object_mut()
        .map(|root| {
            root.entry("scripts")
                .or_insert_with(|| Value::Object(Map::new()))
        })
        .and_then(Value::as_object_mut);

    let Some(scripts) = scripts else {
        println!(
            "   {} package.json scripts section is not an object, leaving it alone",
            "warn:".yellow()
        );
        return Ok(ManifestStatus::Unchanged);
    };

    let status = match scripts.get("prepare").cloned() {
        None => {
            scripts.insert("prepare".to_string(), json!(PREPARE_COMMAND));
            println!("   {} Added prepare script", "ok:".green());
            ManifestStatus::Added
        }
        Some(Value::String(existing)) if existing.contains(PREPARE_COMMAND) => {
            println!(
                "   {} prepare script already runs {} (skipped)",
                "note:".dimmed(),
                PREPARE_COMMAND
            );
            ManifestStatus::Unchanged
        }
        Some(Value::String(existing)) => {
            let chained = format!("{} && {}", existing, PREPARE_COMMAND);
            scripts.insert("prepare".to_string(), json!(chained));
            println!("   {} Updated prepare script", "ok:".green());
            ManifestStatus::Appended
        }
        Some(_) => {
            // Non-string prepare entry; not ours to rewrite
            println!(
                "   {} prepare script is not a string, leaving it alone",
                "warn:".yellow()
            );
            ManifestStatus::Unchanged
        }
    };

    if matches!(status, ManifestStatus::Added | ManifestStatus::Appended) {
        let mut body = serde_json::to_string_pretty(&manifest)?;
        body.push('\n');
        fs::write(&manifest_path, body)?;
    }

    Ok(status)
}
