//! Local config artifacts written by `forge init`.
//!
//! Each generated file delegates to a shared baseline via an "extends"
//! pointer; lefthook.yml has no extends mechanism and is copied verbatim.
//! Creation is idempotent: an existing file is never touched, whatever its
//! content, so user edits survive re-runs.

use crate::error::Result;
use crate::toolkit::Toolkit;
use colored::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Hook-runner config copied verbatim from the toolkit
pub const HOOK_CONFIG: &str = "lefthook.yml";

/// Whether an artifact was written or already present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Created,
    Skipped,
}

/// Per-artifact outcome of an init run
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    pub file_name: String,
    pub status: ArtifactStatus,
}

/// A config file to materialize at the project root
#[derive(Debug, Clone)]
pub struct ConfigArtifact {
    pub file_name: &'static str,
    pub content: Value,
}

/// The fixed artifact list, with extends pointers computed for this project
pub fn config_artifacts(project_root: &Path, toolkit: &Toolkit) -> Vec<ConfigArtifact> {
    vec![
        ConfigArtifact {
            file_name: "biome.json",
            content: json!({
                "$schema": "https://biomejs.dev/schemas/1.9.4/schema.json",
                "extends": [toolkit.extends_pointer(project_root, "biome.json")],
            }),
        },
        ConfigArtifact {
            file_name: ".stylelintrc.json",
            content: json!({
                "extends": [toolkit.extends_pointer(project_root, "stylelint.json")],
            }),
        },
        // npmPkgJsonLint takes a singular extends string, not an array
        ConfigArtifact {
            file_name: ".npmpackagejsonlintrc.json",
            content: json!({
                "extends": toolkit.extends_pointer(project_root, "pkg-lint.json"),
            }),
        },
        ConfigArtifact {
            file_name: ".commitlintrc.json",
            content: json!({
                "extends": ["@commitlint/config-conventional"],
            }),
        },
    ]
}

/// Write every missing config artifact, then copy the hook-runner config.
/// Existing files are reported skipped and left byte-identical.
pub fn write_artifacts(project_root: &Path, toolkit: &Toolkit) -> Result<Vec<ArtifactReport>> {
    let mut reports = Vec::new();

    for artifact in config_artifacts(project_root, toolkit) {
        let target = project_root.join(artifact.file_name);
        let status = if target.exists() {
            println!(
                "   {} {} already exists (skipped)",
                "note:".dimmed(),
                artifact.file_name
            );
            ArtifactStatus::Skipped
        } else {
            let mut body = serde_json::to_string_pretty(&artifact.content)?;
            body.push('\n');
            fs::write(&target, body)?;
            println!("   {} Created {}", "ok:".green(), artifact.file_name);
            ArtifactStatus::Created
        };
        reports.push(ArtifactReport {
            file_name: artifact.file_name.to_string(),
            status,
        });
    }

    let hook_target = project_root.join(HOOK_CONFIG);
    let status = if hook_target.exists() {
        println!(
            "   {} {} already exists (skipped)",
            "note:".dimmed(),
            HOOK_CONFIG
        );
        ArtifactStatus::Skipped
    } else {
        fs::copy(toolkit.baseline(HOOK_CONFIG), &hook_target)?;
        println!("   {} Created {}", "ok:".green(), HOOK_CONFIG);
        ArtifactStatus::Created
    };
    reports.push(ArtifactReport {
        file_name: HOOK_CONFIG.to_string(),
        status,
    });

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_toolkit() -> (TempDir, Toolkit) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("configs")).unwrap();
        fs::write(
            dir.path().join("configs/lefthook.yml"),
            "pre-commit:\n  commands:\n    forge:\n      run: forge staged formatter {staged_files}\n",
        )
        .unwrap();
        let toolkit = Toolkit::at(dir.path());
        (dir, toolkit)
    }

    #[test]
    fn test_artifact_list_shape() {
        let toolkit = Toolkit::at("/opt/forge");
        let artifacts = config_artifacts(Path::new("/srv/project"), &toolkit);
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name).collect();
        assert_eq!(
            names,
            [
                "biome.json",
                ".stylelintrc.json",
                ".npmpackagejsonlintrc.json",
                ".commitlintrc.json",
            ]
        );
    }

    #[test]
    fn test_biome_extends_is_array_with_schema() {
        let toolkit = Toolkit::at("/opt/forge");
        let artifacts = config_artifacts(Path::new("/srv/project"), &toolkit);
        let biome = &artifacts[0].content;
        assert!(biome["$schema"].as_str().unwrap().contains("biomejs.dev"));
        assert!(biome["extends"].is_array());
        assert_eq!(
            biome["extends"][0].as_str().unwrap(),
            "../../opt/forge/configs/biome.json"
        );
    }

    #[test]
    fn test_pkg_lint_extends_is_singular_string() {
        let toolkit = Toolkit::at("/opt/forge");
        let artifacts = config_artifacts(Path::new("/srv/project"), &toolkit);
        let pkg_lint = &artifacts[2].content;
        assert!(pkg_lint["extends"].is_string());
        assert_eq!(
            pkg_lint["extends"].as_str().unwrap(),
            "../../opt/forge/configs/pkg-lint.json"
        );
    }

    #[test]
    fn test_commitlint_names_convention() {
        let toolkit = Toolkit::at("/opt/forge");
        let artifacts = config_artifacts(Path::new("/srv/project"), &toolkit);
        assert_eq!(
            artifacts[3].content["extends"][0].as_str().unwrap(),
            "@commitlint/config-conventional"
        );
    }

    #[test]
    fn test_write_creates_all_artifacts() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        let reports = write_artifacts(project.path(), &toolkit).unwrap();
        assert_eq!(reports.len(), 5);
        for report in &reports {
            assert_eq!(report.status, ArtifactStatus::Created);
            assert!(project.path().join(&report.file_name).is_file());
        }
    }

    #[test]
    fn test_second_run_skips_everything_and_preserves_bytes() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        write_artifacts(project.path(), &toolkit).unwrap();
        let before = fs::read_to_string(project.path().join("biome.json")).unwrap();

        let reports = write_artifacts(project.path(), &toolkit).unwrap();
        for report in &reports {
            assert_eq!(report.status, ArtifactStatus::Skipped);
        }

        let after = fs::read_to_string(project.path().join("biome.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pre_existing_file_left_untouched() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".stylelintrc.json"), "{\"custom\":true}").unwrap();

        let reports = write_artifacts(project.path(), &toolkit).unwrap();
        let stylelint = reports
            .iter()
            .find(|r| r.file_name == ".stylelintrc.json")
            .unwrap();
        assert_eq!(stylelint.status, ArtifactStatus::Skipped);

        let content = fs::read_to_string(project.path().join(".stylelintrc.json")).unwrap();
        assert_eq!(content, "{\"custom\":true}");
    }

    #[test]
    fn test_hook_config_copied_verbatim() {
        let (toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        write_artifacts(project.path(), &toolkit).unwrap();

        let source =
            fs::read_to_string(toolkit_dir.path().join("configs/lefthook.yml")).unwrap();
        let copied = fs::read_to_string(project.path().join("lefthook.yml")).unwrap();
        assert_eq!(source, copied);
    }

    #[test]
    fn test_written_json_is_pretty_with_trailing_newline() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        write_artifacts(project.path(), &toolkit).unwrap();

        let body = fs::read_to_string(project.path().join(".commitlintrc.json")).unwrap();
        assert!(body.ends_with('\n'));
        assert!(body.contains("\n  \"extends\""));
    }
}
