//! pysetup - Bootstrap a local Python development environment.
//!
//! pysetup creates a virtual environment of a chosen Python version in
//! `env/` and installs `requirements.txt` into it, replacing the ad-hoc
//! `setup.py --create-env --install` scripts projects tend to carry.
//!
//! # Modules
//!
//! - [`bootstrap`] - The create / check / install sequence
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings resolved once at startup
//! - [`environment`] - The target environment, manifest, and `.gitignore`
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process execution
//! - [`ui`] - Console output and confirmation prompts
//!
//! # Example
//!
//! ```
//! use pysetup::bootstrap::{Bootstrapper, Plan};
//! use pysetup::config::Settings;
//! use pysetup::shell::MockRunner;
//! use pysetup::ui::MockUI;
//!
//! let dir = std::env::temp_dir().join("pysetup-doc-example-missing");
//! let settings = Settings::new(&dir);
//! let mut runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! // Installing without an environment fails before pip is ever run.
//! let result = Bootstrapper::new(&settings, &mut runner, &mut ui)
//!     .run(&Plan::from_flags(None, true));
//! assert!(result.is_err());
//! assert!(runner.invocations().is_empty());
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
