//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::bootstrap::Plan;
use crate::error::Result;

/// pysetup - Create a Python virtual environment and install its requirements.
#[derive(Debug, Parser)]
#[command(name = "pysetup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the virtual environment with the given Python version
    /// (defaults to the host's python3)
    #[arg(long, value_name = "x.x", require_equals = true, num_args = 0..=1)]
    pub create_env: Option<Option<String>>,

    /// Install required packages from requirements.txt
    #[arg(long)]
    pub install: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Echo each external command before running it
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide pip and venv output unless they fail
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The actions this invocation asks for.
    pub fn plan(&self) -> Plan {
        Plan::from_flags(self.create_env.clone(), self.install)
    }

    /// The project root: `--project` if given, else the working directory.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.project {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pysetup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags() {
        let cli = parse(&[]);
        assert_eq!(cli.create_env, None);
        assert!(!cli.install);
        assert_eq!(cli.plan(), Plan::default());
    }

    #[test]
    fn create_env_without_version() {
        let cli = parse(&["--create-env"]);
        assert_eq!(cli.create_env, Some(None));
        assert!(cli.plan().needs_default_version());
    }

    #[test]
    fn create_env_with_version() {
        let cli = parse(&["--create-env=3.11"]);
        assert_eq!(cli.create_env, Some(Some("3.11".to_string())));
        assert_eq!(cli.plan().requested_version.as_deref(), Some("3.11"));
    }

    #[test]
    fn create_env_does_not_swallow_install() {
        let cli = parse(&["--create-env", "--install"]);
        assert_eq!(cli.create_env, Some(None));
        assert!(cli.install);
    }

    #[test]
    fn install_flag() {
        let plan = parse(&["--install"]).plan();
        assert!(plan.install);
        assert!(!plan.create_env);
    }

    #[test]
    fn global_flags() {
        let cli = parse(&["-v", "--no-color", "--debug", "-p", "/tmp/app"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.debug);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn project_root_prefers_flag() {
        let cli = parse(&["--project", "/srv/app"]);
        assert_eq!(cli.project_root().unwrap(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn project_root_defaults_to_working_directory() {
        let cli = parse(&[]);
        assert_eq!(cli.project_root().unwrap(), std::env::current_dir().unwrap());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["pysetup", "--frobnicate"]).is_err());
    }

    #[test]
    fn help_lists_every_option() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("--create-env"));
        assert!(help.contains("--install"));
        assert!(help.contains("--help"));
    }
}
