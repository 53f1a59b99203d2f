//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Echo every external command before running it.
    Verbose,
    /// Status messages plus live output of external tools.
    #[default]
    Normal,
    /// Outcomes only; tool output is captured and shown on failure.
    Quiet,
}

impl OutputMode {
    /// Resolve the mode from the `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if external tool output is streamed to the console.
    pub fn shows_tool_output(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if command lines are echoed before running.
    pub fn echoes_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if informational messages are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
