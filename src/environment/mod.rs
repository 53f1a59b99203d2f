//! Filesystem facts the bootstrapper works with.
//!
//! - [`TargetEnvironment`] - the virtual environment directory and the
//!   paths inside it
//! - [`DependencyManifest`] - the requirements file handed to pip
//! - [`gitignore`] - keeping the environment out of version control

pub mod gitignore;
pub mod manifest;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Settings;
use crate::error::Result;
use crate::shell::Platform;

pub use gitignore::{ensure_ignored, lists_entry, GitignoreUpdate};
pub use manifest::DependencyManifest;

/// The isolated interpreter installation managed by pysetup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEnvironment {
    path: PathBuf,
    platform: Platform,
}

impl TargetEnvironment {
    /// Create a handle for the environment at `path`.
    pub fn new(path: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            path: path.into(),
            platform,
        }
    }

    /// The environment configured by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.env_dir(), settings.platform())
    }

    /// Root directory of the environment.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the environment directory exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// The environment's own interpreter.
    pub fn python(&self) -> PathBuf {
        self.path
            .join(self.platform.scripts_dir())
            .join(self.platform.python_executable())
    }

    /// The activation script, for hints only. pysetup never sources it.
    pub fn activate_script(&self) -> PathBuf {
        self.path.join(self.platform.scripts_dir()).join("activate")
    }

    /// Delete the environment directory and everything in it.
    pub fn remove(&self) -> Result<()> {
        std::fs::remove_dir_all(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        tracing::debug!("Removed {}", self.path.display());
        Ok(())
    }
}
