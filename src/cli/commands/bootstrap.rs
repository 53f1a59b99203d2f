//! The bootstrap command: create the environment and/or install into it.

use std::path::PathBuf;

use crate::bootstrap::{Bootstrapper, Plan};
use crate::config::Settings;
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Resolve the run settings once, before anything else happens.
///
/// The host interpreter is only asked for its version when `plan` creates
/// an environment without naming a version.
pub fn resolve_settings(
    plan: &Plan,
    project_root: PathBuf,
    probe: &mut dyn ProcessRunner,
) -> Result<Settings> {
    let settings = Settings::new(project_root);
    if plan.needs_default_version() {
        settings.resolve_default_version(probe)
    } else {
        Ok(settings)
    }
}

/// The bootstrap command implementation.
pub struct BootstrapCommand {
    settings: Settings,
    plan: Plan,
    runner: Box<dyn ProcessRunner>,
}

impl BootstrapCommand {
    /// Create a new bootstrap command.
    pub fn new(settings: Settings, plan: Plan, runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            settings,
            plan,
            runner,
        }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the requested plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

impl Command for BootstrapCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!(
            "Bootstrapping {} with {:?}",
            self.settings.project_root().display(),
            self.plan
        );

        let mut bootstrapper = Bootstrapper::new(&self.settings, self.runner.as_mut(), ui);
        match bootstrapper.run(&self.plan) {
            Ok(outcome) => {
                tracing::debug!("Finished: {:?}", outcome);
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
