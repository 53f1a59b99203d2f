//! Error types for pysetup operations.
//!
//! This module defines [`SetupError`], the error type used throughout the
//! application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every failure ends the run with exit code 1 after a single diagnostic,
//! so variants exist to name *what* was missing or failed:
//!
//! - user abort ([`SetupError::Aborted`])
//! - missing prerequisites (interpreter, environment, manifest, default version)
//! - external tool failures ([`SetupError::ToolNotFound`], [`SetupError::CommandFailed`])
//!
//! Filesystem helpers attach context with `anyhow` and surface through
//! [`SetupError::Other`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pysetup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Operator declined to recreate an existing environment.
    #[error("Aborting...")]
    Aborted,

    /// No interpreter executable exists for the requested version.
    #[error(
        "Python {version} is not available on the system. \
         Please install it or specify a different version."
    )]
    InterpreterUnavailable { version: String },

    /// The host interpreter version could not be determined.
    #[error(
        "Could not determine the default Python version ({message}). \
         Pass it explicitly with --create-env=x.x"
    )]
    DefaultVersionUnknown { message: String },

    /// The target environment directory does not exist.
    #[error(
        "Virtual environment not found at {path}. \
         Run 'pysetup --create-env=x.x' to create one."
    )]
    EnvironmentNotFound { path: PathBuf },

    /// The dependency manifest does not exist.
    #[error("{path} not found. Please provide a requirements.txt file.")]
    ManifestNotFound { path: PathBuf },

    /// An external executable could not be located.
    #[error("Command not found: {program}")]
    ToolNotFound { program: String },

    /// An external command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pysetup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_message() {
        assert_eq!(SetupError::Aborted.to_string(), "Aborting...");
    }

    #[test]
    fn interpreter_unavailable_names_version() {
        let err = SetupError::InterpreterUnavailable {
            version: "9.9".into(),
        };
        assert!(err.to_string().contains("Python 9.9 is not available"));
    }

    #[test]
    fn environment_not_found_suggests_create() {
        let err = SetupError::EnvironmentNotFound {
            path: PathBuf::from("/work/env"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/env"));
        assert!(msg.contains("--create-env=x.x"));
    }

    #[test]
    fn manifest_not_found_displays_path() {
        let err = SetupError::ManifestNotFound {
            path: PathBuf::from("/work/requirements.txt"),
        };
        assert!(err.to_string().contains("/work/requirements.txt"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = SetupError::CommandFailed {
            command: "env/bin/python -m pip install -r requirements.txt".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: SetupError = anyhow::anyhow!("reading .gitignore").into();
        assert_eq!(err.to_string(), "reading .gitignore");
    }
}
