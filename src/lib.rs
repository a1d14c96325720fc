//! forge - zero-config developer toolkit
//!
//! Bootstraps a project with shared quality-tool baselines (biome, stylelint,
//! knip, npmPkgJsonLint, lefthook) and orchestrates running those tools,
//! in parallel or sequentially. All actual linting happens in the external
//! tools; forge only decides whether and in what order to invoke them.

pub mod bootstrap;
pub mod error;
pub mod runner;
pub mod toolkit;

pub use error::{ForgeError, Result};
