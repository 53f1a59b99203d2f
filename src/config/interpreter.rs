//! Host interpreter version discovery.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SetupError};
use crate::shell::{Invocation, Platform, ProcessRunner};

static RE_PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)").unwrap());

/// Extract `major.minor` from `python --version` output.
pub fn parse_version(output: &str) -> Option<String> {
    RE_PYTHON_VERSION
        .captures(output)
        .map(|caps| format!("{}.{}", &caps[1], &caps[2]))
}

/// Ask the host's default interpreter for its `major.minor` version.
pub fn detect_default_version(
    runner: &mut dyn ProcessRunner,
    platform: Platform,
) -> Result<String> {
    let program = platform.default_python_command();
    let invocation = Invocation::new(program, ["--version"]);

    let output = runner.run(&invocation).map_err(|e| match e {
        SetupError::ToolNotFound { program } => SetupError::DefaultVersionUnknown {
            message: format!("{} not found on PATH", program),
        },
        other => other,
    })?;

    if !output.success {
        return Err(SetupError::DefaultVersionUnknown {
            message: format!("`{}` exited with {:?}", invocation, output.exit_code),
        });
    }

    // Python 2 printed its version on stderr.
    let version = parse_version(&output.stdout)
        .or_else(|| parse_version(&output.stderr))
        .ok_or_else(|| SetupError::DefaultVersionUnknown {
            message: format!("unrecognized output from `{}`", invocation),
        })?;

    tracing::debug!("Default interpreter version: {}", version);
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use std::time::Duration;

    #[test]
    fn parse_version_full_release() {
        assert_eq!(parse_version("Python 3.12.4\n"), Some("3.12".to_string()));
    }

    #[test]
    fn parse_version_prerelease() {
        assert_eq!(parse_version("Python 3.13.0rc2"), Some("3.13".to_string()));
    }

    #[test]
    fn parse_version_rejects_garbage() {
        assert_eq!(parse_version("command not found"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn detect_runs_default_python() {
        let mut runner = MockRunner::with_handler(|_| Ok(MockRunner::ok("Python 3.11.9\n")));
        let version = detect_default_version(&mut runner, Platform::Posix).unwrap();

        assert_eq!(version, "3.11");
        assert_eq!(runner.command_lines(), vec!["python3 --version"]);
    }

    #[test]
    fn detect_uses_python_on_windows() {
        let mut runner = MockRunner::with_handler(|_| Ok(MockRunner::ok("Python 3.12.1")));
        detect_default_version(&mut runner, Platform::Windows).unwrap();
        assert_eq!(runner.invocations()[0].program, "python");
    }

    #[test]
    fn detect_reads_stderr() {
        let mut runner = MockRunner::with_handler(|_| {
            Ok(crate::shell::ProcessOutput::success(
                String::new(),
                "Python 2.7.18\n".into(),
                Duration::ZERO,
            ))
        });
        let version = detect_default_version(&mut runner, Platform::Posix).unwrap();
        assert_eq!(version, "2.7");
    }

    #[test]
    fn detect_missing_interpreter() {
        let mut runner = MockRunner::with_handler(|inv| {
            Err(SetupError::ToolNotFound {
                program: inv.program.clone(),
            })
        });
        let err = detect_default_version(&mut runner, Platform::Posix).unwrap_err();
        assert!(matches!(err, SetupError::DefaultVersionUnknown { .. }));
        assert!(err.to_string().contains("python3 not found"));
    }

    #[test]
    fn detect_failing_interpreter() {
        let mut runner = MockRunner::with_handler(|_| Ok(MockRunner::failed(1, "broken")));
        let err = detect_default_version(&mut runner, Platform::Posix).unwrap_err();
        assert!(matches!(err, SetupError::DefaultVersionUnknown { .. }));
    }

    #[test]
    fn detect_unparseable_output() {
        let mut runner = MockRunner::with_handler(|_| Ok(MockRunner::ok("hello")));
        let err = detect_default_version(&mut runner, Platform::Posix).unwrap_err();
        assert!(err.to_string().contains("unrecognized output"));
    }
}
