//! The environment bootstrapper.
//!
//! A run is strictly sequential:
//!
//! 1. create the environment, if asked (which always implies install)
//! 2. check that the environment exists
//! 3. install the manifest and upgrade pip, if asked
//!
//! Any failure ends the run. Nothing is retried or rolled back, so a
//! half-populated environment stays on disk when pip fails.
//!
//! The outside world is reached only through [`ProcessRunner`] and
//! [`UserInterface`], so the whole flow runs against mocks in tests.

mod create;
mod install;
pub mod plan;

use std::path::Path;

use crate::config::Settings;
use crate::environment::TargetEnvironment;
use crate::error::{Result, SetupError};
use crate::shell::{Invocation, ProcessOutput, ProcessRunner};
use crate::ui::UserInterface;

pub use plan::Plan;

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// A new environment was created.
    pub created: bool,
    /// Dependencies were installed.
    pub installed: bool,
}

/// Carries out a [`Plan`] against one project.
pub struct Bootstrapper<'a> {
    settings: &'a Settings,
    runner: &'a mut dyn ProcessRunner,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper.
    pub fn new(
        settings: &'a Settings,
        runner: &'a mut dyn ProcessRunner,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            settings,
            runner,
            ui,
        }
    }

    /// Execute `plan`.
    pub fn run(&mut self, plan: &Plan) -> Result<Outcome> {
        let env = TargetEnvironment::from_settings(self.settings);
        let mut outcome = Outcome::default();
        let mut install = plan.install;

        if plan.create_env {
            let version = self.resolve_version(plan)?;
            self.create_environment(&env, &version)?;
            outcome.created = true;
            install = true;
        }

        self.require_environment(&env)?;

        if install {
            self.install_dependencies(&env)?;
            outcome.installed = true;
        }

        if outcome.created {
            let hint = crate::ui::hints::activate_environment(
                &env.activate_script(),
                self.settings.platform(),
            );
            self.ui.show_hint(&hint);
        }

        if !install {
            tracing::debug!("Environment present, nothing else requested");
        }

        Ok(outcome)
    }

    fn resolve_version(&self, plan: &Plan) -> Result<String> {
        plan.requested_version
            .as_deref()
            .or(self.settings.default_version())
            .map(str::to_string)
            .ok_or_else(|| SetupError::DefaultVersionUnknown {
                message: "it was not resolved at startup".to_string(),
            })
    }

    /// Fail unless the environment directory exists.
    fn require_environment(&self, env: &TargetEnvironment) -> Result<()> {
        if env.exists() {
            return Ok(());
        }
        Err(SetupError::EnvironmentNotFound {
            path: env.path().to_path_buf(),
        })
    }

    /// Run an external command, turning a non-zero exit into an error.
    ///
    /// When tool output was not streamed live, the captured output is shown
    /// alongside the failed command.
    fn execute(&mut self, invocation: &Invocation, failure_hint: &str) -> Result<ProcessOutput> {
        let mode = self.ui.output_mode();
        if mode.echoes_commands() {
            self.ui.message(&format!("$ {}", invocation));
        }

        let output = self.runner.run(invocation)?;
        if output.success {
            return Ok(output);
        }

        let captured = if mode.shows_tool_output() {
            String::new()
        } else {
            output.combined_output()
        };
        self.ui
            .show_error_block(&invocation.to_string(), &captured, Some(failure_hint));

        Err(SetupError::CommandFailed {
            command: invocation.to_string(),
            code: output.exit_code,
        })
    }
}

/// Render a path as a command-line argument.
fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
