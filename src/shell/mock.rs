//! Recording process runner for tests.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. Every
//! invocation is recorded, and the outcome comes from a handler closure, so
//! a test can fake a missing interpreter, a failing `pip`, or the side
//! effect of `venv` creating its directory.
//!
//! # Example
//!
//! ```
//! use pysetup::shell::{Invocation, MockRunner, ProcessRunner};
//!
//! let mut runner = MockRunner::new();
//! let out = runner.run(&Invocation::new("python3", ["--version"])).unwrap();
//! assert!(out.success);
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::time::Duration;

use crate::error::Result;

use super::command::{Invocation, ProcessOutput, ProcessRunner};

type Handler = Box<dyn FnMut(&Invocation) -> Result<ProcessOutput>>;

/// Process runner that records invocations and answers via a handler.
pub struct MockRunner {
    invocations: Vec<Invocation>,
    handler: Handler,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRunner")
            .field("invocations", &self.invocations)
            .finish_non_exhaustive()
    }
}

impl MockRunner {
    /// Create a runner where every command succeeds with empty output.
    pub fn new() -> Self {
        Self::with_handler(|_| Ok(Self::ok("")))
    }

    /// Create a runner that answers each invocation with `handler`.
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: FnMut(&Invocation) -> Result<ProcessOutput> + 'static,
    {
        Self {
            invocations: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// A successful output with the given stdout.
    pub fn ok(stdout: &str) -> ProcessOutput {
        ProcessOutput::success(stdout.to_string(), String::new(), Duration::ZERO)
    }

    /// A failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: &str) -> ProcessOutput {
        ProcessOutput::failure(Some(code), String::new(), stderr.to_string(), Duration::ZERO)
    }

    /// All invocations seen so far, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(|i| i.to_string()).collect()
    }

    /// Check whether any invocation's command line contains `fragment`.
    pub fn ran(&self, fragment: &str) -> bool {
        self.invocations
            .iter()
            .any(|i| i.to_string().contains(fragment))
    }
}

impl ProcessRunner for MockRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.invocations.push(invocation.clone());
        (self.handler)(invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;

    #[test]
    fn records_invocations_in_order() {
        let mut runner = MockRunner::new();
        runner.run(&Invocation::new("a", ["1"])).unwrap();
        runner.run(&Invocation::new("b", ["2"])).unwrap();
        assert_eq!(runner.command_lines(), vec!["a 1", "b 2"]);
    }

    #[test]
    fn handler_controls_outcome() {
        let mut runner = MockRunner::with_handler(|inv| {
            if inv.program == "missing" {
                Err(SetupError::ToolNotFound {
                    program: inv.program.clone(),
                })
            } else {
                Ok(MockRunner::failed(2, "nope"))
            }
        });

        assert!(runner
            .run(&Invocation::new("missing", Vec::<String>::new()))
            .is_err());
        let out = runner
            .run(&Invocation::new("other", Vec::<String>::new()))
            .unwrap();
        assert!(!out.success);
        assert_eq!(out.exit_code, Some(2));
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn ran_matches_fragments() {
        let mut runner = MockRunner::new();
        runner
            .run(&Invocation::new("python", ["-m", "pip", "install", "--upgrade", "pip"]))
            .unwrap();
        assert!(runner.ran("--upgrade pip"));
        assert!(!runner.ran("venv"));
    }
}
