//! Host platform conventions.

/// Path and executable naming conventions of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux, macOS, and other POSIX-like hosts.
    Posix,
    /// Windows hosts.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Directory inside a virtual environment holding its executables.
    pub fn scripts_dir(self) -> &'static str {
        match self {
            Platform::Posix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    /// File name of the environment's interpreter.
    pub fn python_executable(self) -> &'static str {
        match self {
            Platform::Posix => "python",
            Platform::Windows => "python.exe",
        }
    }

    /// Command that runs the host's default interpreter.
    pub fn default_python_command(self) -> &'static str {
        match self {
            Platform::Posix => "python3",
            Platform::Windows => "python",
        }
    }

    /// Name of the interpreter executable for a specific `major.minor` version.
    pub fn versioned_python(self, version: &str) -> String {
        format!("python{}", version)
    }
}

/// Check if running in a CI environment.
///
/// Used in `main()` to select the non-interactive UI. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
