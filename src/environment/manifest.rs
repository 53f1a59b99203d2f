//! The dependency manifest.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Result, SetupError};

/// A `requirements.txt` known to exist. Its format belongs to pip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyManifest {
    path: PathBuf,
}

impl DependencyManifest {
    /// Locate the manifest at `path`.
    pub fn locate(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(SetupError::ManifestNotFound { path });
        }
        Ok(Self { path })
    }

    /// Locate the manifest configured by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::locate(settings.manifest_path())
    }

    /// Path to the manifest.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
