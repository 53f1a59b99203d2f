//! Hint text suggesting the operator's next action.

use std::path::Path;

use crate::shell::Platform;

/// Hint shown after the environment was created and populated.
pub fn activate_environment(activate_script: &Path, platform: Platform) -> String {
    match platform {
        Platform::Windows => format!("Activate it with: {}", activate_script.display()),
        Platform::Posix => format!("Activate it with: source {}", activate_script.display()),
    }
}

/// Hint shown when an external tool fails while installing packages.
pub fn after_install_failure() -> &'static str {
    "Check requirements.txt and re-run `pysetup --install`."
}

/// Hint shown when the environment-creation tool fails.
pub fn after_create_failure() -> &'static str {
    "Make sure the venv module is installed for that Python version."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_hint_sources_on_posix() {
        let hint = activate_environment(Path::new("env/bin/activate"), Platform::Posix);
        assert_eq!(hint, "Activate it with: source env/bin/activate");
    }

    #[test]
    fn activate_hint_follows_platform_not_host() {
        let hint = activate_environment(Path::new("env/Scripts/activate"), Platform::Windows);
        assert_eq!(hint, "Activate it with: env/Scripts/activate");
    }

    #[test]
    fn install_failure_hint_mentions_install() {
        assert!(after_install_failure().contains("pysetup --install"));
    }

    #[test]
    fn create_failure_hint_mentions_venv() {
        assert!(after_create_failure().contains("venv"));
    }
}
