//! Creating the target environment.

use crate::config::ENV_DIR_NAME;
use crate::environment::{ensure_ignored, GitignoreUpdate, TargetEnvironment};
use crate::error::{Result, SetupError};
use crate::shell::Invocation;
use crate::ui::{hints, Prompt};

use super::{path_arg, Bootstrapper};

const RECREATE_QUESTION: &str =
    "Virtual environment already exists. Do you want to delete it and create a new one?";

impl Bootstrapper<'_> {
    /// Create `env` with Python `version`, replacing an existing one only
    /// after the operator confirms.
    pub(super) fn create_environment(
        &mut self,
        env: &TargetEnvironment,
        version: &str,
    ) -> Result<()> {
        if env.exists() {
            let prompt = Prompt::confirm("recreate_env", RECREATE_QUESTION);
            if !self.ui.confirm(&prompt)? {
                return Err(SetupError::Aborted);
            }
            env.remove()?;
        }

        self.ui.message(&format!(
            "Creating virtual environment with Python {}...",
            version
        ));

        let platform = self.settings.platform();
        let invocation = Invocation::new(
            platform.versioned_python(version),
            ["-m".to_string(), "venv".to_string(), path_arg(env.path())],
        )
        .in_dir(self.settings.project_root());

        self.execute(&invocation, hints::after_create_failure())
            .map_err(|e| match e {
                SetupError::ToolNotFound { .. } => SetupError::InterpreterUnavailable {
                    version: version.to_string(),
                },
                other => other,
            })?;

        self.ui.success(&format!(
            "Created virtual environment at {}",
            env.path().display()
        ));

        self.update_gitignore()
    }

    fn update_gitignore(&mut self) -> Result<()> {
        match ensure_ignored(&self.settings.gitignore_path(), ENV_DIR_NAME)? {
            GitignoreUpdate::Added => {
                self.ui
                    .success(&format!("Added '{}' to .gitignore", ENV_DIR_NAME));
            }
            GitignoreUpdate::AlreadyPresent => {
                self.ui
                    .message(&format!("'{}' is already in .gitignore", ENV_DIR_NAME));
            }
            GitignoreUpdate::Missing => {
                self.ui
                    .warning(".gitignore not found in the current directory");
            }
        }
        Ok(())
    }
}
