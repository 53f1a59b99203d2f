//! Installing dependencies into the target environment.

use crate::environment::{DependencyManifest, TargetEnvironment};
use crate::error::Result;
use crate::shell::Invocation;
use crate::ui::hints;

use super::{path_arg, Bootstrapper};

impl Bootstrapper<'_> {
    /// Install the manifest with the environment's pip, then upgrade pip.
    pub(super) fn install_dependencies(&mut self, env: &TargetEnvironment) -> Result<()> {
        let settings = self.settings;
        let manifest = DependencyManifest::from_settings(settings)?;
        let python = path_arg(&env.python());
        let manifest_arg = path_arg(manifest.path());
        let root = settings.project_root();

        self.ui.message("Installing packages from requirements.txt...");
        let install = Invocation::new(
            python.as_str(),
            ["-m", "pip", "install", "-r", manifest_arg.as_str()],
        )
        .in_dir(root);
        self.execute(&install, hints::after_install_failure())?;

        self.ui.message("Upgrading pip...");
        let upgrade = Invocation::new(python.as_str(), ["-m", "pip", "install", "--upgrade", "pip"])
            .in_dir(root);
        self.execute(&upgrade, hints::after_install_failure())?;

        self.ui.success("Dependencies installed");
        Ok(())
    }
}
