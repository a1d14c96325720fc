//! Project bootstrapper.
//!
//! `forge init` materializes local configs that delegate to the shared
//! baselines, installs git hooks, and wires `forge init` into the project's
//! npm prepare lifecycle. Every step is independently idempotent, so the
//! whole operation is safe to re-run or interrupt.

pub mod artifacts;
pub mod hooks;
pub mod manifest;

pub use artifacts::{ArtifactReport, ArtifactStatus};
pub use manifest::ManifestStatus;

use crate::error::Result;
use crate::toolkit::Toolkit;
use colored::*;
use std::path::Path;

/// Bootstrapper options
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    pub skip_hooks: bool,
}

/// What an init run did, per step
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub artifacts: Vec<ArtifactReport>,
    pub manifest: ManifestStatus,
}

/// Initialize forge in a project. Fails only on filesystem errors while
/// writing artifacts or the manifest; hook trouble is downgraded to warnings.
pub async fn initialize(
    project_root: &Path,
    toolkit: &Toolkit,
    options: InitOptions,
) -> Result<InitSummary> {
    println!("{}", "Initializing forge...".cyan().bold());
    log::info!(
        "Initializing project {} with toolkit {}",
        project_root.display(),
        toolkit.root().display()
    );

    println!("\n{}", "Writing config files...".cyan());
    let artifacts = artifacts::write_artifacts(project_root, toolkit)?;

    if options.skip_hooks {
        log::info!("Hook installation skipped by flag");
    } else {
        hooks::install_hooks(project_root, toolkit).await;
    }

    println!("\n{}", "Updating package.json...".cyan());
    let manifest = manifest::update_manifest(project_root)?;

    Ok(InitSummary {
        artifacts,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_toolkit() -> (TempDir, Toolkit) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("configs")).unwrap();
        fs::write(dir.path().join("configs/lefthook.yml"), "pre-commit:\n").unwrap();
        let toolkit = Toolkit::at(dir.path());
        (dir, toolkit)
    }

    #[tokio::test]
    async fn test_initialize_fresh_project() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("package.json"), "{}").unwrap();

        let summary = initialize(
            project.path(),
            &toolkit,
            InitOptions { skip_hooks: true },
        )
        .await
        .unwrap();

        assert_eq!(summary.artifacts.len(), 5);
        assert!(
            summary
                .artifacts
                .iter()
                .all(|a| a.status == ArtifactStatus::Created)
        );
        assert_eq!(summary.manifest, ManifestStatus::Added);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("package.json"), "{}").unwrap();

        let options = InitOptions { skip_hooks: true };
        initialize(project.path(), &toolkit, options).await.unwrap();

        let biome_before = fs::read_to_string(project.path().join("biome.json")).unwrap();
        let manifest_before =
            fs::read_to_string(project.path().join("package.json")).unwrap();

        let summary = initialize(project.path(), &toolkit, options).await.unwrap();

        assert!(
            summary
                .artifacts
                .iter()
                .all(|a| a.status == ArtifactStatus::Skipped)
        );
        assert_eq!(summary.manifest, ManifestStatus::Unchanged);
        assert_eq!(
            biome_before,
            fs::read_to_string(project.path().join("biome.json")).unwrap()
        );
        assert_eq!(
            manifest_before,
            fs::read_to_string(project.path().join("package.json")).unwrap()
        );
    }

    #[tokio::test]
    async fn test_initialize_without_manifest_succeeds() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        let summary = initialize(
            project.path(),
            &toolkit,
            InitOptions { skip_hooks: true },
        )
        .await
        .unwrap();

        assert_eq!(summary.manifest, ManifestStatus::Missing);
    }

    #[tokio::test]
    async fn test_initialize_partial_pre_existing_artifacts() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("biome.json"), "{\"mine\":1}").unwrap();

        let summary = initialize(
            project.path(),
            &toolkit,
            InitOptions { skip_hooks: true },
        )
        .await
        .unwrap();

        let biome = summary
            .artifacts
            .iter()
            .find(|a| a.file_name == "biome.json")
            .unwrap();
        assert_eq!(biome.status, ArtifactStatus::Skipped);

        let others_created = summary
            .artifacts
            .iter()
            .filter(|a| a.file_name != "biome.json")
            .all(|a| a.status == ArtifactStatus::Created);
        assert!(others_created);

        assert_eq!(
            fs::read_to_string(project.path().join("biome.json")).unwrap(),
            "{\"mine\":1}"
        );
    }

    #[tokio::test]
    async fn test_initialize_with_hooks_but_no_git_still_succeeds() {
        let (_toolkit_dir, toolkit) = fake_toolkit();
        let project = TempDir::new().unwrap();

        let summary = initialize(project.path(), &toolkit, InitOptions::default())
            .await
            .unwrap();
        assert_eq!(summary.artifacts.len(), 5);
    }
}
