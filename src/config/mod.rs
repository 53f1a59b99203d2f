//! Run configuration.
//!
//! pysetup has no configuration file. Everything it needs is collected once
//! at startup into [`Settings`] and passed down explicitly:
//!
//! - the project root (current directory or `--project`)
//! - the fixed names of the target environment, manifest, and `.gitignore`
//! - the host platform's path conventions
//! - the default interpreter version, when `--create-env` has no version

pub mod interpreter;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{Platform, ProcessRunner};

pub use interpreter::{detect_default_version, parse_version};

/// Directory name of the target environment.
pub const ENV_DIR_NAME: &str = "env";

/// File name of the dependency manifest.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// File name of the git ignore list.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    project_root: PathBuf,
    platform: Platform,
    default_version: Option<String>,
}

impl Settings {
    /// Create settings for `project_root` on the host platform.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            platform: Platform::host(),
            default_version: None,
        }
    }

    /// Override the platform conventions.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the default interpreter version.
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    /// Fill in the default interpreter version by asking the host interpreter.
    pub fn resolve_default_version(self, runner: &mut dyn ProcessRunner) -> Result<Self> {
        let version = detect_default_version(runner, self.platform)?;
        Ok(self.with_default_version(version))
    }

    /// Project root all fixed paths are relative to.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Host platform conventions.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Default interpreter version, if resolved.
    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }

    /// Path of the target environment directory.
    pub fn env_dir(&self) -> PathBuf {
        self.project_root.join(ENV_DIR_NAME)
    }

    /// Path of the dependency manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }

    /// Path of the project's `.gitignore`.
    pub fn gitignore_path(&self) -> PathBuf {
        self.project_root.join(GITIGNORE_FILE)
    }
}
