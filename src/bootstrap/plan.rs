//! What a single invocation asks for.

/// Actions requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Create (or recreate) the environment.
    pub create_env: bool,

    /// Interpreter version given as `--create-env=<version>`.
    pub requested_version: Option<String>,

    /// Install the manifest into the environment.
    pub install: bool,
}

impl Plan {
    /// Build a plan from the parsed `--create-env[=<version>]` and `--install` flags.
    ///
    /// An empty version (`--create-env=`) counts as no version.
    pub fn from_flags(create_env: Option<Option<String>>, install: bool) -> Self {
        let requested_version = create_env
            .clone()
            .flatten()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            create_env: create_env.is_some(),
            requested_version,
            install,
        }
    }

    /// Whether the host interpreter version is needed to carry out the plan.
    pub fn needs_default_version(&self) -> bool {
        self.create_env && self.requested_version.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_empty_plan() {
        let plan = Plan::from_flags(None, false);
        assert_eq!(plan, Plan::default());
        assert!(!plan.needs_default_version());
    }

    #[test]
    fn create_without_version_needs_default() {
        let plan = Plan::from_flags(Some(None), false);
        assert!(plan.create_env);
        assert!(plan.needs_default_version());
    }

    #[test]
    fn create_with_version() {
        let plan = Plan::from_flags(Some(Some("3.11".into())), true);
        assert!(plan.create_env);
        assert!(plan.install);
        assert_eq!(plan.requested_version.as_deref(), Some("3.11"));
        assert!(!plan.needs_default_version());
    }

    #[test]
    fn empty_version_falls_back_to_default() {
        let plan = Plan::from_flags(Some(Some(String::new())), false);
        assert_eq!(plan.requested_version, None);
        assert!(plan.needs_default_version());
    }

    #[test]
    fn install_only() {
        let plan = Plan::from_flags(None, true);
        assert!(!plan.create_env);
        assert!(plan.install);
    }
}
