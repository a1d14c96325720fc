//! Toolkit installation layout.
//!
//! The toolkit ships shared baseline configs under `<root>/configs/` and the
//! vendored quality-tool binaries under `<root>/node_modules/.bin/`. Local
//! project configs written by `forge init` point back at the baselines with a
//! relative "extends" path computed here.

use crate::error::{ForgeError, Result};
use std::path::{Component, Path, PathBuf};

/// Environment variable overriding the toolkit installation root.
pub const TOOLKIT_ROOT_ENV: &str = "FORGE_TOOLKIT_ROOT";

/// Resolved toolkit installation
#[derive(Debug, Clone)]
pub struct Toolkit {
    root: PathBuf,
}

impl Toolkit {
    /// Resolve the toolkit root: explicit override, then `FORGE_TOOLKIT_ROOT`,
    /// then the parent of the directory containing the running executable
    /// (an installed layout is `<root>/bin/forge`).
    pub fn resolve(override_root: Option<&Path>) -> Result<Self> {
        if let Some(root) = override_root {
            return Ok(Self {
                root: root.to_path_buf(),
            });
        }

        if let Ok(value) = std::env::var(TOOLKIT_ROOT_ENV) {
            if !value.is_empty() {
                return Ok(Self {
                    root: PathBuf::from(value),
                });
            }
        }

        let exe = std::env::current_exe()
            .map_err(|e| ForgeError::Toolkit(format!("cannot locate executable: {}", e)))?;
        let root = exe
            .parent()
            .and_then(|bin_dir| bin_dir.parent())
            .ok_or_else(|| {
                ForgeError::Toolkit(format!(
                    "cannot derive toolkit root from executable at {}",
                    exe.display()
                ))
            })?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Create a toolkit rooted at the given directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The installation root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a vendored tool binary
    pub fn tool_bin(&self, name: &str) -> PathBuf {
        self.root.join("node_modules/.bin").join(name)
    }

    /// Path to a shared baseline config file
    pub fn baseline(&self, name: &str) -> PathBuf {
        self.root.join("configs").join(name)
    }

    /// Relative "extends" pointer from a project root to a baseline config,
    /// always forward-slash separated so generated configs are portable.
    pub fn extends_pointer(&self, project_root: &Path, baseline_name: &str) -> String {
        let rel = relative_path(project_root, &self.baseline(baseline_name));
        rel.iter()
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Lexical relative path from directory `from` to `to`.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_bin_path() {
        let toolkit = Toolkit::at("/opt/forge");
        assert_eq!(
            toolkit.tool_bin("biome"),
            PathBuf::from("/opt/forge/node_modules/.bin/biome")
        );
    }

    #[test]
    fn test_baseline_path() {
        let toolkit = Toolkit::at("/opt/forge");
        assert_eq!(
            toolkit.baseline("stylelint.json"),
            PathBuf::from("/opt/forge/configs/stylelint.json")
        );
    }

    #[test]
    fn test_resolve_with_override() {
        let toolkit = Toolkit::resolve(Some(Path::new("/custom/root"))).unwrap();
        assert_eq!(toolkit.root(), Path::new("/custom/root"));
    }

    #[test]
    fn test_relative_path_sibling() {
        let rel = relative_path(
            Path::new("/home/user/project"),
            Path::new("/home/user/toolkit/configs/biome.json"),
        );
        assert_eq!(rel, PathBuf::from("../toolkit/configs/biome.json"));
    }

    #[test]
    fn test_relative_path_nested_under_from() {
        let rel = relative_path(Path::new("/a/b"), Path::new("/a/b/c/d"));
        assert_eq!(rel, PathBuf::from("c/d"));
    }

    #[test]
    fn test_relative_path_ancestor() {
        let rel = relative_path(Path::new("/a/b/c"), Path::new("/a"));
        assert_eq!(rel, PathBuf::from("../.."));
    }

    #[test]
    fn test_relative_path_same() {
        let rel = relative_path(Path::new("/a/b"), Path::new("/a/b"));
        assert_eq!(rel, PathBuf::from("."));
    }

    #[test]
    fn test_extends_pointer_forward_slashes() {
        let toolkit = Toolkit::at("/home/user/.forge");
        let pointer = toolkit.extends_pointer(Path::new("/home/user/project"), "biome.json");
        assert_eq!(pointer, "../.forge/configs/biome.json");
        assert!(!pointer.contains('\\'));
    }

    #[test]
    fn test_extends_pointer_deep_project() {
        let toolkit = Toolkit::at("/opt/forge");
        let pointer = toolkit.extends_pointer(Path::new("/srv/work/app"), "pkg-lint.json");
        assert_eq!(pointer, "../../../opt/forge/configs/pkg-lint.json");
    }
}
