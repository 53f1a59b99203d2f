//! `.gitignore` maintenance.
//!
//! The environment directory is appended to an existing `.gitignore` at most
//! once. A missing `.gitignore` is reported, never created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Outcome of [`ensure_ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreUpdate {
    /// The entry was appended.
    Added,
    /// The entry was already listed; nothing written.
    AlreadyPresent,
    /// No `.gitignore` exists; nothing written.
    Missing,
}

/// Check whether `contents` already mentions `entry` anywhere.
///
/// This is a plain substring test: `venv/` or `.env` count as listing `env`.
pub fn lists_entry(contents: &str, entry: &str) -> bool {
    contents.contains(entry)
}

/// Make sure the `.gitignore` at `path` lists `entry`.
pub fn ensure_ignored(path: &Path, entry: &str) -> Result<GitignoreUpdate> {
    if !path.is_file() {
        return Ok(GitignoreUpdate::Missing);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if lists_entry(&contents, entry) {
        return Ok(GitignoreUpdate::AlreadyPresent);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for appending", path.display()))?;
    write!(file, "\n{}\n", entry)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Appended '{}' to {}", entry, path.display());
    Ok(GitignoreUpdate::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_entry_exact_line() {
        assert!(lists_entry("target\nenv\n", "env"));
    }

    #[test]
    fn lists_entry_with_slashes_and_spaces() {
        assert!(lists_entry("env/\n", "env"));
        assert!(lists_entry("/env\n", "env"));
        assert!(lists_entry("  /env/  \n", "env"));
    }

    #[test]
    fn lists_entry_accepts_any_mention() {
        assert!(lists_entry("venv/\n", "env"));
        assert!(lists_entry(".env\n", "env"));
        assert!(lists_entry("# python env\n", "env"));
    }

    #[test]
    fn lists_entry_without_mention() {
        assert!(!lists_entry("", "env"));
        assert!(!lists_entry("target/\n*.pyc\n", "env"));
    }

    #[test]
    fn missing_gitignore_is_not_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");

        assert_eq!(ensure_ignored(&path, "env").unwrap(), GitignoreUpdate::Missing);
        assert!(!path.exists());
    }

    #[test]
    fn appends_with_leading_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "target").unwrap();

        assert_eq!(ensure_ignored(&path, "env").unwrap(), GitignoreUpdate::Added);
        assert_eq!(fs::read_to_string(&path).unwrap(), "target\nenv\n");
    }

    #[test]
    fn already_present_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "env/\n").unwrap();

        assert_eq!(
            ensure_ignored(&path, "env").unwrap(),
            GitignoreUpdate::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "env/\n");
    }

    #[test]
    fn venv_line_counts_as_present() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "venv/\n").unwrap();

        assert_eq!(
            ensure_ignored(&path, "env").unwrap(),
            GitignoreUpdate::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "venv/\n");
    }

    #[test]
    fn repeated_calls_never_duplicate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "*.pyc\n").unwrap();

        ensure_ignored(&path, "env").unwrap();
        ensure_ignored(&path, "env").unwrap();
        ensure_ignored(&path, "env").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().filter(|l| *l == "env").count(), 1);
    }
}
